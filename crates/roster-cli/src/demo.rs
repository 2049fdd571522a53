//! Scripted walkthroughs of each management system
//!
//! Each walkthrough seeds a fresh system, prints its starting state, applies a
//! fixed series of changes and prints what every query returns afterwards.

use crate::config::SystemName;
use anyhow::Context;
use roster_core::{
    EmployeeManagement, HospitalManagement, InventoryManagement, LibraryManagement,
    RestaurantManagement,
};
use roster_types::hospital::{DATE_FORMAT, TIME_FORMAT};
use roster_types::{Appointment, Book, Doctor, Employee, MenuItem, Patient, Product, StaffMember};
use std::fmt::Debug;
use tracing::{info, instrument};

fn heading(title: &str) {
    println!("\n{title}:");
}

fn print_all<T: Debug>(items: impl IntoIterator<Item = T>) {
    for item in items {
        println!("  {item:?}");
    }
}

/// Replay the walkthrough for `system` (every system for [`SystemName::All`])
pub fn run(system: SystemName) -> anyhow::Result<()> {
    for &name in system.expand() {
        println!("==== {name} ====");
        match name {
            SystemName::Employee => employee()?,
            SystemName::Hospital => hospital()?,
            SystemName::Inventory => inventory()?,
            SystemName::Library => library()?,
            SystemName::Restaurant => restaurant()?,
            SystemName::All => {}
        }
        println!();
    }
    Ok(())
}

/// Seeded state of `system` as JSON
pub fn snapshot(system: SystemName) -> anyhow::Result<serde_json::Value> {
    let value = match system {
        SystemName::Employee => serde_json::to_value(EmployeeManagement::new())?,
        SystemName::Hospital => serde_json::to_value(HospitalManagement::new()?)?,
        SystemName::Inventory => serde_json::to_value(InventoryManagement::new())?,
        SystemName::Library => serde_json::to_value(LibraryManagement::new())?,
        SystemName::Restaurant => serde_json::to_value(RestaurantManagement::new())?,
        SystemName::All => {
            let mut systems = serde_json::Map::new();
            for &name in SystemName::All.expand() {
                systems.insert(name.to_string(), snapshot(name)?);
            }
            serde_json::Value::Object(systems)
        }
    };
    Ok(value)
}

#[instrument]
fn employee() -> anyhow::Result<()> {
    let mut mgmt = EmployeeManagement::new();
    info!(employees = mgmt.catalog().len(), "employee walkthrough started");

    heading("Employee catalog");
    print_all(mgmt.catalog());
    heading("Departments");
    println!("  {:?}", mgmt.departments());
    heading("Skills");
    println!("  {:?}", mgmt.list_all_skills());
    heading("Department assignments");
    for (department, ids) in mgmt.catalog().groups() {
        println!("  {department}: {ids:?}");
    }

    mgmt.add_employee(6, "Frank", 29, "Marketing", ["SEO", "Content Writing"])?;
    mgmt.remove_employee(3)?;
    heading("Employee catalog after changes");
    print_all(mgmt.catalog());

    heading("Employee 2");
    println!("  {:?}", mgmt.get_employee_details(2));
    heading("Employees in IT");
    println!("  {:?}", mgmt.list_employees_by_department("IT"));
    println!("\nEmployees in HR: {}", mgmt.count_employees_by_department("HR"));
    println!("Index of employee 2: {:?}", mgmt.find_employee_index(2));

    mgmt.add_skill("Project Management");
    mgmt.remove_skill("Networking");
    heading("All skills");
    println!("  {:?}", mgmt.list_all_skills());

    heading("Employees sorted by age");
    print_all(mgmt.sort_employees_by_age());
    heading("Departments reversed");
    println!("  {:?}", mgmt.reverse_departments());

    let (max_age, min_age) = mgmt.find_max_min_age()?;
    println!("\nMaximum age: {max_age}, minimum age: {min_age}");
    println!("Occurrences of 'Python': {}", mgmt.count_skill_occurrences("Python"));
    println!("Common skills: {:?}", mgmt.find_common_skills(["Python", "SEO", "Data Analysis"]));
    println!("Unique skills: {:?}", mgmt.find_unique_skills());

    mgmt.update_employee_details(2, Employee::new(2, "Bob", 26, "Finance", ["Python", "Accounting"]))?;
    println!("Updated employee 2: {:?}", mgmt.get_employee_details(2));

    let merged = mgmt.merge_employee_catalogs(vec![
        Employee::new(7, "Grace", 32, "IT", ["Python", "Machine Learning"]),
        Employee::new(8, "Hank", 45, "HR", ["Recruitment", "Training"]),
    ]);
    println!("Merged {merged} employees; ids now {:?}", mgmt.get_all_employee_ids());

    mgmt.clear_employee_catalog();
    println!("After clearing: {:?}", mgmt.get_all_employee_ids());
    Ok(())
}

#[instrument]
fn hospital() -> anyhow::Result<()> {
    let mut hospital = HospitalManagement::new()?;
    info!(patients = hospital.patients().len(), "hospital walkthrough started");

    heading("Patient catalog");
    print_all(hospital.patients());
    heading("Doctor catalog");
    print_all(hospital.doctors());
    heading("Specialties");
    println!("  {:?}", hospital.list_all_specialties());
    heading("Departments");
    println!("  {:?}", hospital.list_all_departments());
    heading("Appointment schedule");
    for appointment in hospital.appointments() {
        println!(
            "  {} patient {} with doctor {} on {} at {}",
            appointment.id,
            appointment.patient_id,
            appointment.doctor_id,
            appointment.date.format(DATE_FORMAT),
            appointment.time.format(TIME_FORMAT),
        );
    }

    hospital.add_patient(Patient::new(6, "Frank", 60, "Male", ["Diabetes"]))?;
    hospital.remove_patient(3)?;
    heading("Patient catalog after changes");
    print_all(hospital.patients());

    heading("Patient 2");
    println!("  {:?}", hospital.get_patient_details(2));
    heading("Male patients");
    print_all(hospital.list_patients_by_gender("Male"));
    println!("\nFemale patients: {}", hospital.count_patients_by_gender("Female"));
    println!("Index of patient 2: {:?}", hospital.find_patient_index(2));

    hospital.add_specialty("Dermatology");
    hospital.remove_specialty("Orthopedics");
    heading("All specialties");
    println!("  {:?}", hospital.list_all_specialties());
    hospital.add_department("Dermatology");
    hospital.remove_department("Orthopedics");
    heading("All departments");
    println!("  {:?}", hospital.list_all_departments());

    let follow_up = Appointment::parse(206, 1, 101, "2023-10-06", "03:00 PM")
        .context("invalid follow-up appointment")?;
    hospital.append_appointment(follow_up)?;
    hospital.remove_appointment(202)?;
    heading("Appointments after changes");
    print_all(hospital.appointments());

    heading("Patients sorted by age");
    print_all(hospital.sort_patients_by_age());
    heading("Doctors sorted by age");
    print_all(hospital.sort_doctors_by_age());
    heading("Appointments reversed");
    print_all(hospital.reverse_appointments());

    let (max_age, min_age) = hospital.find_max_min_age_patients()?;
    println!("\nOldest patient: {max_age}, youngest patient: {min_age}");
    let (max_age, min_age) = hospital.find_max_min_age_doctors()?;
    println!("Oldest doctor: {max_age}, youngest doctor: {min_age}");
    println!(
        "Occurrences of 'Diabetes': {}",
        hospital.count_medical_history_occurrences("Diabetes")
    );
    println!(
        "Common specialties: {:?}",
        hospital.find_common_specialties(["Cardiology", "Dermatology", "Oncology"])
    );
    println!("Unique specialties: {:?}", hospital.find_unique_specialties());

    hospital.update_patient_details(2, Patient::new(2, "Bob", 46, "Male", ["Asthma", "Allergy"]))?;
    println!("Updated patient 2: {:?}", hospital.get_patient_details(2));
    hospital.update_doctor_details(102, Doctor::new(102, "Dr. Johnson", 41, "Neurology", "Neurology"))?;
    println!("Updated doctor 102: {:?}", hospital.get_doctor_details(102));

    let merged = hospital.merge_patient_catalogs(vec![
        Patient::new(7, "Grace", 28, "Female", ["Anemia"]),
        Patient::new(8, "Hank", 55, "Male", ["Hypertension"]),
    ]);
    println!("Merged {merged} patients; ids now {:?}", hospital.get_all_patient_ids());
    println!("Doctor ids: {:?}", hospital.get_all_doctor_ids());

    hospital.clear_patient_catalog();
    println!("After clearing patients: {:?}", hospital.get_all_patient_ids());
    Ok(())
}

#[instrument]
fn inventory() -> anyhow::Result<()> {
    let mut inventory = InventoryManagement::new();
    info!(products = inventory.products().len(), "inventory walkthrough started");

    heading("Product catalog");
    print_all(inventory.products());
    heading("Suppliers");
    print_all(inventory.suppliers());
    heading("Categories");
    println!("  {:?}", inventory.list_all_categories());
    heading("Product names");
    println!("  {:?}", inventory.list_all_product_names());
    heading("Stock levels");
    for (id, stock) in inventory.stock_levels() {
        println!("  {id}: {stock}");
    }

    inventory.add_product(Product::new(6, "Tablet", "Electronics", 102, 300.0, 150))?;
    inventory.remove_product(3)?;
    heading("Product catalog after changes");
    print_all(inventory.products());

    heading("Product 2");
    println!("  {:?}", inventory.get_product_details(2));
    heading("Electronics");
    print_all(inventory.list_products_by_category("Electronics"));
    println!("\nStationery products: {}", inventory.count_products_by_category("Stationery"));
    println!("Index of product 2: {:?}", inventory.find_product_index(2));

    inventory.add_category("Books");
    inventory.remove_category("Furniture");
    heading("All categories");
    println!("  {:?}", inventory.list_all_categories());
    inventory.add_product_name("Eraser");
    inventory.remove_product_name("Notebook");
    heading("All product names");
    println!("  {:?}", inventory.list_all_product_names());

    heading("Products sorted by price");
    print_all(inventory.sort_products_by_price());
    heading("Suppliers reversed");
    print_all(inventory.reverse_suppliers());

    let (max_price, min_price) = inventory.find_max_min_price()?;
    println!("\nMaximum price: {max_price}, minimum price: {min_price}");
    println!(
        "Occurrences of 'Electronics': {}",
        inventory.count_category_occurrences("Electronics")
    );
    println!(
        "Common categories: {:?}",
        inventory.find_common_categories(["Electronics", "Books", "Toys"])
    );
    println!("Unique categories: {:?}", inventory.find_unique_categories());

    inventory.update_product_details(2, Product::new(2, "Smartphone", "Electronics", 102, 550.0, 180))?;
    println!("Updated product 2: {:?}", inventory.get_product_details(2));
    println!("Stock of product 2: {:?}", inventory.stock_level(2));

    let merged = inventory.merge_product_catalogs(vec![
        Product::new(7, "Headphones", "Electronics", 101, 80.0, 300),
        Product::new(8, "Bookshelf", "Furniture", 103, 120.0, 40),
    ]);
    println!("Merged {merged} products; ids now {:?}", inventory.get_all_product_ids());
    println!("Supplier ids: {:?}", inventory.get_all_supplier_ids());

    inventory.clear_product_catalog();
    println!("After clearing products: {:?}", inventory.get_all_product_ids());
    Ok(())
}

#[instrument]
fn library() -> anyhow::Result<()> {
    let mut library = LibraryManagement::new();
    info!(books = library.books().len(), "library walkthrough started");

    heading("Library catalog");
    print_all(library.books());
    heading("Genres");
    println!("  {:?}", library.list_all_genres());
    heading("User checkouts");
    for user in library.users() {
        println!("  {user}: {:?}", library.checkouts(user));
    }

    library.add_book("The Alchemist", "Paulo Coelho", 1988, "Fiction")?;
    library.remove_book("1984")?;
    heading("Library catalog after changes");
    print_all(library.books());

    heading("The Great Gatsby");
    println!("  {:?}", library.get_book_details("The Great Gatsby"));
    heading("Books by George Orwell");
    println!("  {:?}", library.list_books_by_author("George Orwell"));
    println!("\nBooks by George Orwell: {}", library.count_books_by_author("George Orwell"));
    println!("Index of 'The Great Gatsby': {:?}", library.find_book_index("The Great Gatsby"));

    library.add_genre("Mystery");
    library.remove_genre("Romance");
    heading("All genres");
    println!("  {:?}", library.list_all_genres());

    library.checkout_book("Alice", "The Great Gatsby")?;
    library.return_book("Alice", "The Great Gatsby")?;
    heading("User checkouts after transactions");
    for user in library.users() {
        println!("  {user}: {:?}", library.checkouts(user));
    }

    heading("Books sorted by year");
    print_all(library.sort_books_by_year());
    heading("Users reversed");
    println!("  {:?}", library.reverse_users());

    let (max_year, min_year) = library.find_max_min_year()?;
    println!("\nLatest year: {max_year}, earliest year: {min_year}");
    println!(
        "Common genres: {:?}",
        library.find_common_genres(["Fiction", "Mystery", "Adventure"])
    );
    println!("Unique genres: {:?}", library.find_unique_genres());

    library.update_book_details(
        "The Great Gatsby",
        Book::new("The Great Gatsby", "F. Scott Fitzgerald", 1925, "Classic"),
    )?;
    println!("Updated 'The Great Gatsby': {:?}", library.get_book_details("The Great Gatsby"));

    let merged = library.merge_library_catalogs(vec![
        Book::new("Brave New World", "Aldous Huxley", 1932, "Science Fiction"),
        Book::new("Moby Dick", "Herman Melville", 1851, "Classic"),
    ]);
    println!("Merged {merged} books; titles now {:?}", library.get_all_book_titles());

    library.clear_library_catalog();
    println!("After clearing: {:?}", library.get_all_book_titles());
    Ok(())
}

#[instrument]
fn restaurant() -> anyhow::Result<()> {
    let mut restaurant = RestaurantManagement::new();
    info!(menu_items = restaurant.menu().len(), "restaurant walkthrough started");

    heading("Menu catalog");
    print_all(restaurant.menu());
    heading("Staff");
    print_all(restaurant.staff());
    heading("Cuisines");
    println!("  {:?}", restaurant.list_all_cuisines());
    heading("Roles");
    println!("  {:?}", restaurant.list_all_roles());
    heading("Table assignments");
    for (id, available) in restaurant.table_assignments() {
        let status = if available { "Available" } else { "Not Available" };
        println!("  Table {id}: {status}");
    }

    restaurant.add_menu_item(MenuItem::new(6, "Salad", "Healthy", 6.0, true))?;
    restaurant.remove_menu_item(3)?;
    heading("Menu catalog after changes");
    print_all(restaurant.menu());

    heading("Menu item 2");
    println!("  {:?}", restaurant.get_menu_item_details(2));
    heading("Italian dishes");
    print_all(restaurant.list_menu_items_by_cuisine("Italian"));
    println!("\nAmerican dishes: {}", restaurant.count_menu_items_by_cuisine("American"));
    println!("Index of menu item 2: {:?}", restaurant.find_menu_item_index(2));

    restaurant.add_cuisine("French");
    restaurant.remove_cuisine("Japanese");
    heading("All cuisines");
    println!("  {:?}", restaurant.list_all_cuisines());
    restaurant.add_role("Bartender");
    restaurant.remove_role("Manager");
    heading("All roles");
    println!("  {:?}", restaurant.list_all_roles());

    heading("Menu sorted by price");
    print_all(restaurant.sort_menu_items_by_price());
    heading("Staff sorted by age");
    print_all(restaurant.sort_staff_by_age());
    heading("Tables reversed");
    print_all(restaurant.reverse_tables());

    let (max_price, min_price) = restaurant.find_max_min_price()?;
    println!("\nMaximum price: {max_price}, minimum price: {min_price}");
    let (max_age, min_age) = restaurant.find_max_min_age_staff()?;
    println!("Oldest staff member: {max_age}, youngest: {min_age}");
    println!("Occurrences of 'Italian': {}", restaurant.count_cuisine_occurrences("Italian"));
    println!(
        "Common cuisines: {:?}",
        restaurant.find_common_cuisines(["Italian", "French", "Chinese"])
    );
    println!("Unique cuisines: {:?}", restaurant.find_unique_cuisines());

    heading("Waiters");
    print_all(restaurant.list_staff_by_role("Waiter"));
    println!("\nChefs: {}", restaurant.count_staff_by_role("Chef"));

    restaurant.update_staff_details(102, StaffMember::new(102, "Bob", 26, "Manager"))?;
    println!("Updated staff 102: {:?}", restaurant.get_staff_details(102));
    restaurant.set_table_availability(2, true)?;

    let merged = restaurant.merge_staff_catalogs(vec![
        StaffMember::new(106, "Frank", 22, "Bartender"),
        StaffMember::new(101, "Alice", 30, "Chef"),
    ]);
    println!("Merged {merged} staff; ids now {:?}", restaurant.get_all_staff_ids());
    println!("Menu ids: {:?}", restaurant.get_all_menu_item_ids());

    restaurant.clear_menu_catalog();
    println!("After clearing the menu: {:?}", restaurant.get_all_menu_item_ids());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_walkthrough_completes() {
        run(SystemName::All).unwrap();
    }

    #[test]
    fn test_snapshot_of_all_names_each_system() {
        let value = snapshot(SystemName::All).unwrap();

        for name in ["employee", "hospital", "inventory", "library", "restaurant"] {
            assert!(value.get(name).is_some(), "missing {name}");
        }
        assert_eq!(value["library"]["users"].as_array().map(Vec::len), Some(4));
    }
}
