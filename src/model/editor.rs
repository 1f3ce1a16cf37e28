//! Editor state - the committed car list plus the draft form values
//!
//! Every operation consumes the old state and returns the new one, so the
//! owner decides when a replacement happens and a redraw follows.

use super::car::{CarId, CarList, CarRecord};
use chrono::{Datelike, Local};

/// Source of the current calendar year
pub trait Clock {
    fn current_year(&self) -> i32;
}

/// Reads the year from the local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// Always reports the same year
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i32);

#[cfg(test)]
impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

/// In-progress field values for the next record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftState {
    /// Raw text of the numeric year input
    pub year: String,
    pub brand: String,
    pub name: String,
}

impl DraftState {
    /// Draft with the year set to `year` and empty brand and name
    pub fn fresh(year: i32) -> Self {
        Self {
            year: year.to_string(),
            brand: String::new(),
            name: String::new(),
        }
    }

    /// The record these values would produce
    pub fn to_record(&self) -> CarRecord {
        CarRecord::new(self.year.clone(), self.brand.clone(), self.name.clone())
    }
}

/// All state owned by the car list editor
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub cars: CarList,
    pub draft: DraftState,
}

impl EditorState {
    /// Empty list, draft year defaulted to the current year
    pub fn new(clock: &dyn Clock) -> Self {
        Self {
            cars: CarList::new(),
            draft: DraftState::fresh(clock.current_year()),
        }
    }

    /// Append the draft as a new record and reset the draft
    ///
    /// No validation: empty brand, name or year are committed as they are.
    pub fn add_car(mut self, clock: &dyn Clock) -> Self {
        let record = self.draft.to_record();
        let text = record.display_text();
        let id = self.cars.push(record);
        tracing::info!(id = id.value(), car = %text, "car added");
        self.draft = DraftState::fresh(clock.current_year());
        self
    }

    /// Remove the record at `index` as it was in the last render
    pub fn remove_car(mut self, index: usize) -> Self {
        match self.cars.remove_at(index) {
            Some((id, record)) => {
                tracing::info!(id = id.value(), %record, index, "car removed");
            }
            None => {
                tracing::debug!(index, len = self.cars.len(), "remove ignored, index out of range");
            }
        }
        self
    }

    /// Remove the record with the given id, if it is still present
    pub fn remove_car_by_id(mut self, id: CarId) -> Self {
        match self.cars.remove_by_id(id) {
            Some(record) => tracing::info!(id = id.value(), %record, "car removed"),
            None => tracing::debug!(id = id.value(), "remove ignored, id not present"),
        }
        self
    }

    pub fn change_year(mut self, value: impl Into<String>) -> Self {
        self.draft.year = value.into();
        self
    }

    pub fn change_brand(mut self, value: impl Into<String>) -> Self {
        self.draft.brand = value.into();
        self
    }

    pub fn change_name(mut self, value: impl Into<String>) -> Self {
        self.draft.name = value.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOCK: FixedClock = FixedClock(2024);

    fn with_two_cars() -> EditorState {
        EditorState::new(&CLOCK)
            .change_year("1999")
            .change_brand("Toyota")
            .change_name("Corolla")
            .add_car(&CLOCK)
            .change_year("2020")
            .change_brand("Ford")
            .change_name("Mustang")
            .add_car(&CLOCK)
    }

    #[test]
    fn test_new_state_defaults_to_current_year() {
        let state = EditorState::new(&CLOCK);
        assert!(state.cars.is_empty());
        assert_eq!(state.draft, DraftState::fresh(2024));
        assert_eq!(state.draft.year, "2024");
    }

    #[test]
    fn test_add_car_appends_and_resets_draft() {
        let state = EditorState::new(&CLOCK)
            .change_year("1999")
            .change_brand("Toyota")
            .change_name("Corolla")
            .add_car(&CLOCK);

        assert_eq!(state.cars.len(), 1);
        assert_eq!(
            state.cars.get(0),
            Some(&CarRecord::new("1999", "Toyota", "Corolla"))
        );
        assert_eq!(state.draft.year, "2024");
        assert!(state.draft.brand.is_empty());
        assert!(state.draft.name.is_empty());
    }

    #[test]
    fn test_add_car_goes_to_the_end() {
        let state = with_two_cars()
            .change_brand("Honda")
            .change_name("Civic")
            .add_car(&CLOCK);

        assert_eq!(state.cars.len(), 3);
        assert_eq!(
            state.cars.get(2),
            Some(&CarRecord::new("2024", "Honda", "Civic"))
        );
    }

    #[test]
    fn test_add_car_with_empty_fields_is_accepted() {
        let state = EditorState::new(&CLOCK).add_car(&CLOCK);
        assert_eq!(state.cars.len(), 1);
        assert_eq!(state.cars.get(0), Some(&CarRecord::new("2024", "", "")));
    }

    #[test]
    fn test_add_car_with_cleared_year() {
        let state = EditorState::new(&CLOCK)
            .change_year("")
            .change_brand("Ford")
            .add_car(&CLOCK);
        assert_eq!(state.cars.get(0).map(|c| c.year.as_str()), Some(""));
        assert_eq!(state.draft.year, "2024");
    }

    #[test]
    fn test_add_car_keeps_year_text_uncoerced() {
        let state = EditorState::new(&CLOCK)
            .change_year("99999999999")
            .change_brand("Ford")
            .change_name("T")
            .add_car(&CLOCK)
            .change_year("0199")
            .change_brand("Ford")
            .change_name("T")
            .add_car(&CLOCK);

        let shown: Vec<String> = state.cars.iter().map(CarRecord::display_text).collect();
        assert_eq!(shown, vec!["99999999999-Ford-T", "0199-Ford-T"]);
    }

    #[test]
    fn test_add_car_uses_clock_at_reset_time() {
        let state = EditorState::new(&FixedClock(2023)).add_car(&FixedClock(2025));
        assert_eq!(state.cars.get(0).unwrap().year, "2023");
        assert_eq!(state.draft.year, "2025");
    }

    #[test]
    fn test_remove_first_of_two() {
        let state = with_two_cars().remove_car(0);
        assert_eq!(state.cars.len(), 1);
        assert_eq!(state.cars.get(0).unwrap().display_text(), "2020-Ford-Mustang");
    }

    #[test]
    fn test_remove_out_of_range_keeps_list() {
        let state = with_two_cars().remove_car(5);
        assert_eq!(state.cars.len(), 2);
    }

    #[test]
    fn test_remove_by_id() {
        let state = with_two_cars();
        let mustang = state.cars.id_at(1).unwrap();
        let state = state.remove_car(0).remove_car_by_id(mustang);
        assert!(state.cars.is_empty());
    }

    #[test]
    fn test_change_fields_are_independent() {
        let state = EditorState::new(&CLOCK).change_brand("Ford");
        assert_eq!(state.draft.brand, "Ford");
        assert_eq!(state.draft.year, "2024");
        assert!(state.draft.name.is_empty());

        let state = state.change_name("Focus");
        assert_eq!(state.draft.brand, "Ford");
        assert_eq!(state.draft.name, "Focus");
    }

    #[test]
    fn test_remove_does_not_touch_draft() {
        let state = with_two_cars().change_brand("Draft").remove_car(1);
        assert_eq!(state.draft.brand, "Draft");
    }
}
