//! UI state - presentation state separate from the car data

/// Control that currently receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Year,
    Brand,
    Name,
    AddButton,
    List,
}

impl Focus {
    pub fn next(&self) -> Focus {
        match self {
            Focus::Year => Focus::Brand,
            Focus::Brand => Focus::Name,
            Focus::Name => Focus::AddButton,
            Focus::AddButton => Focus::List,
            Focus::List => Focus::Year,
        }
    }

    pub fn prev(&self) -> Focus {
        match self {
            Focus::Year => Focus::List,
            Focus::Brand => Focus::Year,
            Focus::Name => Focus::Brand,
            Focus::AddButton => Focus::Name,
            Focus::List => Focus::AddButton,
        }
    }

    /// Whether this control is a text input
    pub fn is_input(&self) -> bool {
        matches!(self, Focus::Year | Focus::Brand | Focus::Name)
    }

    pub fn label(&self) -> &str {
        match self {
            Focus::Year => "Year",
            Focus::Brand => "Brand",
            Focus::Name => "Name",
            Focus::AddButton => "Add Car",
            Focus::List => "Car List",
        }
    }
}
