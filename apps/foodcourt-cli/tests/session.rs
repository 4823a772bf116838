//! Scripted end-to-end sessions against a temporary data directory.

use std::io::Cursor;
use std::path::Path;

use foodcourt_cli::config::AppConfig;
use foodcourt_cli::prompt::Prompter;
use foodcourt_cli::run_session;
use foodcourt_cli::state::FoodCourtManager;
use foodcourt_core::{Money, StallKind};
use foodcourt_store::{FoodCourtStore, Snapshot, StoreConfig};

fn session(dir: &Path, input: &str) -> String {
    let store = FoodCourtStore::open(StoreConfig::new(dir)).unwrap();
    let log = store.event_log();
    let mut manager = FoodCourtManager::load(store, &log);

    let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    run_session(&mut prompter, &AppConfig::default(), &mut manager).unwrap();
    String::from_utf8(prompter.into_output()).unwrap()
}

fn reload(dir: &Path) -> Snapshot {
    let store = FoodCourtStore::open(StoreConfig::new(dir)).unwrap();
    let log = store.event_log();
    store.load_snapshot(&log)
}

fn read(dir: &Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(name)).unwrap()
}

/// Customer login, one order at `stall`, then exit.
fn one_order(phone: &str, stall: u8, picks: &str) -> String {
    format!("2\nAsha\n{}\n{}\n{}N\n\n8\n", phone, stall, picks)
}

#[test]
fn test_large_pepperoni_pair_costs_1000() {
    let dir = tempfile::tempdir().unwrap();
    let shown = session(dir.path(), &one_order("100", 1, "2\n3\n2\n"));

    assert!(shown.contains("========= Order #1 ========="));
    assert!(shown.contains("Large Pepperoni Pizza"));
    assert!(shown.contains("Rs. 1000.00"));
    assert!(shown.contains("Thank you for visiting!"));

    assert_eq!(read(dir.path(), "total_sales.txt"), "1000.00");
    assert_eq!(read(dir.path(), "order_counter.txt"), "1");
    assert!(read(dir.path(), "all_orders.txt").contains("Order #1"));
}

#[test]
fn test_bad_selection_is_logged_and_reoffered() {
    let dir = tempfile::tempdir().unwrap();
    let shown = session(dir.path(), &one_order("100", 2, "99\n1\n1\n"));

    assert!(shown.contains("Error: Invalid dosa selection 99 (choose 1 to 4)"));
    assert!(read(dir.path(), "food_court_log.txt").contains("Invalid dosa selection 99"));

    let snapshot = reload(dir.path());
    let dosa = &snapshot.stalls[1];
    assert_eq!(dosa.kind(), StallKind::Dosa);
    assert_eq!(dosa.order_count(), 1);
    assert_eq!(dosa.orders()[0].lines().len(), 1);
    assert_eq!(dosa.total_sales(), Money::from_rupees(50));
}

#[test]
fn test_overall_sales_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    session(dir.path(), &one_order("100", 1, "1\n1\n1\n")); // 200
    session(dir.path(), &one_order("100", 3, "4\n2\n")); // 240
    session(dir.path(), &one_order("200", 4, "1\n3\n")); // 45

    let snapshot = reload(dir.path());
    assert_eq!(snapshot.counters.overall_sales(), Money::from_rupees(485));
    assert!(snapshot.reconciliation.is_consistent());
    assert_eq!(snapshot.counters.total_customers(), 2);
}

#[test]
fn test_order_ids_continue_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    for _ in 0..3 {
        session(dir.path(), &one_order("100", 4, "2\n1\n"));
    }

    let ledger = read(dir.path(), "all_orders.txt");
    let first = ledger.find("Order #1 ").unwrap();
    let second = ledger.find("Order #2 ").unwrap();
    let third = ledger.find("Order #3 ").unwrap();
    assert!(first < second && second < third);

    let snapshot = reload(dir.path());
    let ids: Vec<u64> = snapshot.stalls[3].orders().iter().map(|o| o.id()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(snapshot.counters.total_orders(), 3);
}

#[test]
fn test_failed_admin_login_is_reoffered() {
    let dir = tempfile::tempdir().unwrap();
    let shown = session(dir.path(), "1\nadmin\nnope\n1\nadmin\nadmin@12345\n8\n");

    assert!(shown.contains("Authentication failed! Invalid credentials."));
    assert!(shown.contains("======== Admin Menu ========"));
    assert!(shown.contains("Logging out..."));

    let log = read(dir.path(), "food_court_log.txt");
    assert!(log.contains("Authentication failed"));
    assert!(log.contains("Admin logged in"));
}

#[test]
fn test_returning_customer_recognized() {
    let dir = tempfile::tempdir().unwrap();
    session(dir.path(), "2\nAsha\n100\n8\n");
    let shown = session(dir.path(), "2\nSomeone Else\n100\n8\n");

    assert!(shown.contains("Welcome back, Asha!"));
    let snapshot = reload(dir.path());
    assert_eq!(snapshot.customers.len(), 1);
    assert_eq!(snapshot.customers.get("100").unwrap().id, Some(1));
    assert!(read(dir.path(), "food_court_log.txt").contains("Existing customer logged in: Asha (100)"));
}

#[test]
fn test_admin_report_written() {
    let dir = tempfile::tempdir().unwrap();
    session(dir.path(), &one_order("100", 2, "2\n3\n")); // 210
    let shown = session(dir.path(), "1\nadmin\nadmin@12345\n6\n\n7\n\n8\n");

    assert!(shown.contains("Total Sales across all stalls: Rs. 210.00"));
    assert!(shown.contains("Total Orders: 1"));

    let report = read(dir.path(), "sales_report.txt");
    assert!(report.contains("Stall: Dosa Corner"));
    assert!(report.contains("GRAND TOTAL: Rs. 210.00"));
    assert!(!report.contains("Reconciliation"));
}

#[test]
fn test_input_ending_mid_order_ends_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    session(dir.path(), "2\nAsha\n100\n4\n1\n");

    assert_eq!(read(dir.path(), "order_counter.txt"), "1");
    assert!(!dir.path().join("stall_4.txt").exists());
    assert!(read(dir.path(), "food_court_log.txt").contains("Order #1 abandoned"));

    let snapshot = reload(dir.path());
    assert_eq!(snapshot.counters.overall_sales(), Money::zero());
}

#[test]
fn test_unwritable_ledger_reported_and_menu_reoffered() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("all_orders.txt")).unwrap();

    let shown = session(dir.path(), "2\nAsha\n100\n4\n1\n1\nN\n8\n");

    let error_at = shown.find("Error: Cannot access").unwrap();
    assert!(shown.contains("all_orders.txt"));
    assert!(!shown.contains("Order placed successfully!"));
    assert_eq!(shown.matches("======== Customer Menu ========").count(), 2);
    assert!(shown[error_at..].contains("======== Customer Menu ========"));
    assert!(shown[error_at..].contains("Thank you for visiting!"));

    let log = read(dir.path(), "food_court_log.txt");
    assert!(log.contains("Cannot access"));
    assert!(log.contains("all_orders.txt"));
}

#[test]
fn test_unwritable_order_counter_reported_and_menu_reoffered() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("order_counter.txt")).unwrap();

    let shown = session(dir.path(), "2\nAsha\n100\n4\n8\n");

    let error_at = shown.find("Error: Cannot access").unwrap();
    assert!(!shown.contains("Chai Point Menu"));
    assert!(shown[error_at..].contains("======== Customer Menu ========"));
    assert!(shown.ends_with("Thank you for visiting!\n"));

    let log = read(dir.path(), "food_court_log.txt");
    assert!(log.contains("Cannot access"));
    assert!(log.contains("order_counter.txt"));
    assert!(!dir.path().join("stall_4.txt").exists());
}
