//! Tests for the comparator family.

use chrono::NaiveDate;
use records_model::{Person, SortStyle};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn named(last_name: &str, gender: &str) -> Person {
    Person::new(last_name, "First", gender, "Color", date(2000, 1, 1))
}

fn born(last_name: &str, dob: NaiveDate) -> Person {
    Person::new(last_name, "First", "Gender", "Color", dob)
}

fn keys(persons: &[Person]) -> Vec<(String, String)> {
    persons
        .iter()
        .map(|p| (p.gender().to_string(), p.last_name().to_string()))
        .collect()
}

#[test]
fn gender_then_last_name_ascending() {
    let mut persons = vec![
        named("Aarons", "Male"),
        named("Brady", "Female"),
        named("Aarons", "Female"),
        named("anderson", "Female"),
        named("Zed", "Female"),
        named("Tom", "Male"),
        named("Bob", "Male"),
    ];
    SortStyle::GenderLastNameAsc.sort(&mut persons);
    let names: Vec<&str> = persons.iter().map(Person::last_name).collect();
    assert_eq!(
        names,
        vec!["Aarons", "anderson", "Brady", "Zed", "Aarons", "Bob", "Tom"]
    );
    assert!(persons[..4].iter().all(|p| p.gender() == "Female"));
    assert!(persons[4..].iter().all(|p| p.gender() == "Male"));
}

#[test]
fn gender_groups_female_before_male() {
    let mut persons = vec![
        named("Toph", "Female"),
        named("Sokka", "Male"),
        named("Azula", "Female"),
    ];
    SortStyle::GenderLastNameAsc.sort(&mut persons);
    assert_eq!(
        keys(&persons),
        vec![
            ("Female".to_string(), "Azula".to_string()),
            ("Female".to_string(), "Toph".to_string()),
            ("Male".to_string(), "Sokka".to_string()),
        ]
    );
}

#[test]
fn gender_is_case_sensitive() {
    let mut persons = vec![named("A", "female"), named("B", "Male")];
    SortStyle::GenderLastNameAsc.sort(&mut persons);
    // 'M' sorts before 'f' byte-wise.
    assert_eq!(persons[0].gender(), "Male");
}

#[test]
fn ties_keep_input_order() {
    let first = Person::new("Beifong", "Toph", "Female", "Green", date(1990, 1, 1));
    let second = Person::new("beifong", "Lin", "Female", "Grey", date(1960, 1, 1));
    let third = Person::new("BEIFONG", "Suyin", "Female", "Silver", date(1965, 1, 1));
    let mut persons = vec![first.clone(), second.clone(), third.clone()];

    SortStyle::GenderLastNameAsc.sort(&mut persons);
    assert_eq!(persons, vec![first.clone(), second.clone(), third.clone()]);

    SortStyle::LastNameDesc.sort(&mut persons);
    assert_eq!(persons, vec![first, second, third]);
}

#[test]
fn birthdate_ascending() {
    let mut persons = vec![
        born("a", date(1900, 12, 2)),
        born("b", date(2000, 12, 2)),
        born("c", date(1998, 5, 2)),
        born("d", date(1998, 12, 2)),
    ];
    SortStyle::BirthdateAsc.sort(&mut persons);
    let dates: Vec<NaiveDate> = persons.iter().map(Person::date_of_birth).collect();
    assert_eq!(
        dates,
        vec![
            date(1900, 12, 2),
            date(1998, 5, 2),
            date(1998, 12, 2),
            date(2000, 12, 2),
        ]
    );
}

#[test]
fn last_name_descending() {
    let mut persons: Vec<Person> = ["Aarons", "Brady", "anderson", "Zed", "Tom", "Bob"]
        .into_iter()
        .map(|name| named(name, "Gender"))
        .collect();
    SortStyle::LastNameDesc.sort(&mut persons);
    let names: Vec<&str> = persons.iter().map(Person::last_name).collect();
    assert_eq!(names, vec!["Zed", "Tom", "Brady", "Bob", "anderson", "Aarons"]);
}

#[test]
fn sorting_twice_is_idempotent() {
    let original = vec![
        Person::new("Grey", "Gandalf", "Male", "Rainbow", date(1100, 4, 3)),
        Person::new("Baggins", "Bilbo", "Male", "Green", date(1290, 9, 22)),
        Person::new("Galadriel", "Lady", "Female", "Silver", date(1000, 1, 1)),
        Person::new("baggins", "Frodo", "Male", "Blue", date(1368, 9, 22)),
    ];
    for style in SortStyle::ALL {
        let mut once = original.clone();
        style.sort(&mut once);
        let mut twice = once.clone();
        style.sort(&mut twice);
        assert_eq!(once, twice, "style {style}");
    }
}

#[test]
fn comparator_matches_sort() {
    let a = named("Aarons", "Female");
    let b = named("Brady", "Female");
    let cmp = SortStyle::GenderLastNameAsc.comparator();
    assert_eq!(cmp(&a, &b), std::cmp::Ordering::Less);
    let cmp = SortStyle::LastNameDesc.comparator();
    assert_eq!(cmp(&a, &b), std::cmp::Ordering::Greater);
}
