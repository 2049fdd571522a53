use roster_core::*;
use roster_types::{Book, Employee, Patient, Product, Supplier};

#[test]
fn test_employee_scenario() {
    let mut mgmt = EmployeeManagement::new();

    assert_eq!(mgmt.get_all_employee_ids(), vec![1, 2, 3, 4, 5]);
    assert_eq!(mgmt.count_employees_by_department("IT"), 2);

    mgmt.add_employee(6, "Frank", 29, "Marketing", ["SEO", "Content Writing"]).unwrap();
    assert_eq!(mgmt.count_employees_by_department("Marketing"), 1);

    mgmt.remove_employee(3).unwrap();
    assert!(mgmt.get_employee_details(3).is_none());
    assert_eq!(mgmt.find_max_min_age(), Ok((40, 25)));

    let unique = mgmt.find_unique_skills();
    assert!(unique.contains("SEO"));
    assert!(!unique.contains("Python"));
    assert_eq!(
        mgmt.find_common_skills(["Python", "Go", "Excel"]).into_iter().collect::<Vec<_>>(),
        vec!["Excel", "Python"]
    );

    let moved = Employee::new(2, "Bob", 26, "Marketing", ["Python", "Networking"]);
    mgmt.update_employee_details(2, moved).unwrap();
    assert_eq!(mgmt.list_employees_by_department("Marketing"), vec![6, 2]);
    assert!(mgmt.list_employees_by_department("IT").iter().all(|&id| id != 2));

    mgmt.clear_employee_catalog();
    assert!(mgmt.get_all_employee_ids().is_empty());
    assert_eq!(mgmt.count_employees_by_department("HR"), 0);
    assert!(!mgmt.list_all_skills().is_empty());
}

#[test]
fn test_hospital_scenario() {
    let mut hospital = HospitalManagement::new().unwrap();

    hospital.add_patient(Patient::new(6, "Frank", 40, "Male", ["Migraine"])).unwrap();
    assert_eq!(
        hospital.add_patient(Patient::new(6, "Frank", 40, "Male", ["Migraine"])),
        Err(CatalogError::already_exists("patient", 6))
    );
    assert_eq!(hospital.count_patients_by_gender("Male"), 3);
    assert_eq!(hospital.find_max_min_age_doctors(), Ok((55, 35)));

    hospital.remove_appointment(203).unwrap();
    assert_eq!(hospital.appointments().keys(), vec![201, 202, 204, 205]);
    assert_eq!(hospital.remove_doctor(999), Err(CatalogError::not_found("doctor", 999)));
}

#[test]
fn test_inventory_scenario() {
    let mut inventory = InventoryManagement::new();

    inventory.add_product(Product::new(6, "Monitor", "Electronics", 101, 200.0, 75)).unwrap();
    inventory.add_supplier(Supplier::new(105, "Screen Supply", "567-890-1234")).unwrap();

    assert_eq!(inventory.count_products_by_category("Electronics"), 3);
    assert_eq!(inventory.count_category_occurrences("Stationery"), 2);
    assert_eq!(inventory.stock_level(6), Some(75));
    assert!(inventory.find_unique_categories().is_empty());

    inventory.clear_categories();
    assert!(inventory.list_all_categories().is_empty());
    assert_eq!(inventory.count_products_by_category("Electronics"), 3);
}

#[test]
fn test_library_scenario() {
    let mut library = LibraryManagement::new();

    library.add_book("Dune", "Frank Herbert", 1965, "Science Fiction").unwrap();
    assert!(library.add_book("Dune", "Someone Else", 2021, "Fiction").is_err());
    assert_eq!(library.get_book_details("Dune").map(|b| b.author.as_str()), Some("Frank Herbert"));

    let unique = library.find_unique_genres();
    assert!(unique.contains("Fantasy"));
    assert!(!unique.contains("Classic"));

    library.checkout_book("Bob", "Dune").unwrap();
    library.remove_book("Dune").unwrap();
    assert_eq!(library.checkouts("Bob"), &["Dune".to_string()]);

    let merged = library.merge_library_catalogs(vec![
        Book::new("1984", "Someone Else", 2000, "Fiction"),
        Book::new("Dune", "Frank Herbert", 1965, "Science Fiction"),
    ]);
    assert_eq!(merged, 1);
    assert_eq!(library.get_book_details("1984").map(|b| b.year), Some(1949));
}

#[test]
fn test_restaurant_scenario() {
    let mut restaurant = RestaurantManagement::new();

    assert_eq!(restaurant.find_max_min_price(), Ok((12.0, 5.0)));
    assert_eq!(restaurant.count_menu_items_by_cuisine("Italian"), 2);
    assert_eq!(restaurant.list_all_roles(), vec!["Chef", "Manager", "Waiter"]);

    restaurant.remove_menu_item(3).unwrap();
    assert!(restaurant.list_all_cuisines().contains(&"Japanese"));
    assert_eq!(restaurant.count_cuisine_occurrences("Japanese"), 0);
    assert_eq!(restaurant.reverse_tables()[0].id, 5);
}
