use roster_core::*;
use roster_types::employee::SKILLS;
use roster_types::{Employee, MenuItem};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq)]
struct Member {
    id: u32,
    age: u32,
    team: String,
}

impl Member {
    fn new(id: u32, age: u32, team: &str) -> Self {
        Self { id, age, team: team.to_string() }
    }
}

impl Record for Member {
    type Key = u32;

    const KIND: &'static str = "member";

    fn key(&self) -> &u32 {
        &self.id
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!("member {}", self.id))
    }

    fn group(&self) -> Option<&str> {
        Some(self.team.as_str())
    }
}

fn staff() -> EntityCatalog<Employee> {
    EntityCatalog::with_groups(
        ["HR", "IT", "Finance", "Marketing"],
        vec![
            Employee::new(1, "Alice", 30, "HR", ["Recruitment", "Training"]),
            Employee::new(2, "Bob", 25, "IT", ["Python", "Networking"]),
            Employee::new(3, "Charlie", 28, "Finance", ["Accounting", "Excel"]),
            Employee::new(4, "Diana", 35, "IT", ["Java", "Security"]),
        ],
    )
}

#[test]
fn test_add_then_get_and_find_index() {
    let mut catalog = staff();
    let frank = Employee::new(6, "Frank", 29, "Marketing", ["SEO"]);

    catalog.add(frank.clone()).unwrap();

    assert_eq!(catalog.get(&6), Some(&frank));
    assert_eq!(catalog.find_index(&6), Some(4));
    assert_eq!(catalog.list_by_group("Marketing"), vec![6]);
}

#[test]
fn test_duplicate_add_leaves_catalog_unchanged() {
    let mut catalog = staff();
    let before = catalog.clone();

    let err = catalog.add(Employee::new(2, "Robert", 52, "Finance", ["Golf"])).unwrap_err();

    assert_eq!(err, CatalogError::already_exists("employee", 2));
    assert_eq!(err.to_string(), "employee '2' already exists");
    assert_eq!(catalog.records(), before.records());
    assert_eq!(catalog.groups(), before.groups());
    assert_eq!(catalog.tags(), before.tags());
}

#[test]
fn test_remove_absent_leaves_catalog_unchanged() {
    let mut catalog = staff();
    let before = catalog.clone();

    let err = catalog.remove(&42).unwrap_err();

    assert_eq!(err.category(), "not_found");
    assert!(err.is_recoverable());
    assert_eq!(catalog.records(), before.records());
    assert_eq!(catalog.groups(), before.groups());
}

#[test]
fn test_add_remove_round_trip_keeps_tags() {
    let mut catalog = staff();
    let before = catalog.clone();

    catalog.add(Employee::new(6, "Frank", 29, "Marketing", ["SEO", "Content Writing"])).unwrap();
    catalog.remove(&6).unwrap();

    assert_eq!(catalog.records(), before.records());
    assert_eq!(catalog.groups(), before.groups());
    assert!(catalog.get(&6).is_none());
    // tags are never retracted by remove
    assert_ne!(catalog.tags(), before.tags());
    assert!(catalog.contains_tag(SKILLS, "SEO"));
    assert_eq!(catalog.count_tagged(SKILLS, "SEO"), 0);
}

#[test]
fn test_merge_twice_is_idempotent() {
    let mut catalog = staff();
    let other = vec![
        Employee::new(2, "Impostor", 99, "HR", ["Forgery"]),
        Employee::new(5, "Eve", 40, "HR", ["Employee Relations"]),
    ];

    assert_eq!(catalog.merge(other.clone()), 1);
    let after_first = catalog.clone();
    assert_eq!(catalog.merge(other), 0);

    assert_eq!(catalog.records(), after_first.records());
    assert_eq!(catalog.groups(), after_first.groups());
    assert_eq!(catalog.get(&2).map(|e| e.name.as_str()), Some("Bob"));
}

#[test]
fn test_sort_by_age_is_stable() {
    let catalog = EntityCatalog::new(vec![
        Member::new(1, 30, "a"),
        Member::new(2, 25, "b"),
        Member::new(3, 30, "a"),
    ]);

    let sorted: Vec<_> = catalog.sorted_by_key(|m| m.age).iter().map(|m| (m.id, m.age)).collect();

    assert_eq!(sorted, vec![(2, 25), (1, 30), (3, 30)]);
    assert_eq!(catalog.keys(), vec![1, 2, 3]);
}

#[test]
fn test_max_min_menu_price() {
    let menu = EntityCatalog::new(vec![
        MenuItem::new(1, "Margherita Pizza", "Italian", 8.0, true),
        MenuItem::new(2, "Tacos", "Mexican", 5.0, true),
        MenuItem::new(3, "Sushi", "Japanese", 12.0, false),
        MenuItem::new(4, "Pasta Carbonara", "Italian", 10.0, true),
        MenuItem::new(5, "Burger", "American", 7.0, true),
    ]);

    assert_eq!(menu.min_max_by(|item| item.price), Ok((12.0, 5.0)));
}

#[test]
fn test_update_relocation_leaves_key_in_one_bucket() {
    let mut catalog = EntityCatalog::with_groups(
        ["a", "b", "c"],
        vec![Member::new(1, 30, "a"), Member::new(2, 25, "b")],
    );

    catalog.update(&1, Member::new(1, 31, "c")).unwrap();

    let holding: Vec<_> = catalog
        .groups()
        .into_iter()
        .filter(|(_, keys)| keys.contains(&1))
        .map(|(group, _)| group)
        .collect();
    assert_eq!(holding, vec!["c"]);
    assert_eq!(catalog.group_stats().map(|s| s.indexed_keys), Some(2));
}

#[test]
fn test_update_missing_key_is_not_found() {
    let mut catalog = staff();

    let err = catalog.update(&9, Employee::new(9, "Nobody", 1, "HR", ["None"])).unwrap_err();

    assert_eq!(err, CatalogError::not_found("employee", 9));
    assert_eq!(catalog.len(), 4);
}

#[test]
fn test_catalog_serializes_sequence_and_groups() {
    let catalog = staff();

    let json = serde_json::to_value(&catalog).unwrap();

    assert_eq!(json["sequence"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["groups"]["buckets"]["IT"], serde_json::json!([2, 4]));
    assert!(json.get("index").is_none());
}
