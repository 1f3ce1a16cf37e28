//! Car records and the ordered list that holds them

use std::fmt;

/// Stable identity of a committed record
///
/// Generated by [`CarList`] from a monotonically increasing counter, so an id
/// is never reused within one list even after removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarId(u64);

impl CarId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single car entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarRecord {
    /// Text of the numeric input exactly as committed, empty if it was cleared
    pub year: String,
    pub brand: String,
    pub name: String,
}

impl CarRecord {
    pub fn new(
        year: impl Into<String>,
        brand: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            brand: brand.into(),
            name: name.into(),
        }
    }

    /// Text shown in the list, `{year}-{brand}-{name}`
    pub fn display_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CarRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.brand, self.name)
    }
}

/// An ordered sequence of records; insertion order is display order
#[derive(Debug, Clone, Default)]
pub struct CarList {
    entries: Vec<(CarId, CarRecord)>,
    next_id: u64,
}

impl CarList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end and return its id
    pub fn push(&mut self, record: CarRecord) -> CarId {
        let id = CarId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, record));
        id
    }

    /// Remove the record at `index`, shifting later records up by one
    ///
    /// Returns `None` and leaves the list untouched when `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<(CarId, CarRecord)> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Remove the record carrying `id`, wherever it currently sits
    pub fn remove_by_id(&mut self, id: CarId) -> Option<CarRecord> {
        let index = self.index_of(id)?;
        self.remove_at(index).map(|(_, record)| record)
    }

    pub fn index_of(&self, id: CarId) -> Option<usize> {
        self.entries.iter().position(|(entry_id, _)| *entry_id == id)
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<&CarRecord> {
        self.entries.get(index).map(|(_, record)| record)
    }

    pub fn id_at(&self, index: usize) -> Option<CarId> {
        self.entries.get(index).map(|(id, _)| *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CarRecord> {
        self.entries.iter().map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> CarList {
        let mut list = CarList::new();
        list.push(CarRecord::new("1999", "Toyota", "Corolla"));
        list.push(CarRecord::new("2020", "Ford", "Mustang"));
        list.push(CarRecord::new("1967", "Chevrolet", "Impala"));
        list
    }

    #[test]
    fn test_display_text() {
        let car = CarRecord::new("2020", "Ford", "Mustang");
        assert_eq!(car.display_text(), "2020-Ford-Mustang");
    }

    #[test]
    fn test_display_text_with_empty_fields() {
        let car = CarRecord::new("", "", "");
        assert_eq!(car.display_text(), "--");

        let car = CarRecord::new("2001", "", "");
        assert_eq!(car.display_text(), "2001--");
    }

    #[test]
    fn test_year_text_is_shown_verbatim() {
        assert_eq!(CarRecord::new("0199", "Ford", "T").display_text(), "0199-Ford-T");
        assert_eq!(
            CarRecord::new("99999999999", "Ford", "T").display_text(),
            "99999999999-Ford-T"
        );
        assert_eq!(CarRecord::new("-", "Ford", "T").display_text(), "--Ford-T");
    }

    #[test]
    fn test_push_appends_in_order() {
        let list = sample_list();
        assert_eq!(list.len(), 3);
        let names: Vec<&str> = list.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Corolla", "Mustang", "Impala"]);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut list = sample_list();
        let first = list.id_at(0).unwrap();
        list.remove_at(2);
        let fresh = list.push(CarRecord::new("2010", "Honda", "Civic"));
        assert!(fresh > first);
        assert_eq!(fresh.value(), 3);
    }

    #[test]
    fn test_remove_at_shifts_later_records() {
        let mut list = sample_list();
        let removed = list.remove_at(1).map(|(_, r)| r);
        assert_eq!(removed, Some(CarRecord::new("2020", "Ford", "Mustang")));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).unwrap().name, "Impala");
    }

    #[test]
    fn test_remove_at_out_of_range_is_ignored() {
        let mut list = sample_list();
        assert!(list.remove_at(3).is_none());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_by_id_after_indices_shift() {
        let mut list = sample_list();
        let impala = list.id_at(2).unwrap();
        list.remove_at(0);
        assert_eq!(list.index_of(impala), Some(1));

        let removed = list.remove_by_id(impala);
        assert_eq!(removed.unwrap().brand, "Chevrolet");
        assert_eq!(list.len(), 1);
        assert!(list.remove_by_id(impala).is_none());
    }
}
