use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{ADMIN, EMPLOYEE, init_demo_db, login, pp};

fn add_claire(db_path: &str) -> assert_cmd::assert::Assert {
    pp().args([
        "--db",
        db_path,
        "employee",
        "add",
        "--email",
        "claire@planningpro.com",
        "--given",
        "Claire",
        "--family",
        "Martin",
        "--password",
        "claire42",
        "--hired",
        "2024-09-01",
    ])
    .assert()
}

#[test]
fn admin_manages_accounts() {
    let db_path = init_demo_db("cli_employee_manage");
    login(&db_path, ADMIN);

    add_claire(&db_path)
        .success()
        .stdout(contains("Account created: Claire Martin <claire@planningpro.com> as employee (id 3)"));

    pp().args(["--db", &db_path, "employee", "list"])
        .assert()
        .success()
        .stdout(contains("claire@planningpro.com"))
        .stdout(contains("2024-09-01"))
        .stdout(contains("3 account(s)"));

    pp().args(["--db", &db_path, "employee", "list", "--search", "dupont"])
        .assert()
        .success()
        .stdout(contains("employe@planningpro.com"))
        .stdout(contains("claire@planningpro.com").not());

    add_claire(&db_path)
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn deactivated_account_cannot_sign_in() {
    let db_path = init_demo_db("cli_employee_deactivate");
    login(&db_path, ADMIN);

    pp().args([
        "--db", &db_path, "employee", "status", EMPLOYEE.0, "inactive",
    ])
    .assert()
    .success()
    .stdout(contains("is now inactive"));

    pp().args([
        "--db", &db_path, "login", "--email", EMPLOYEE.0, "--password", EMPLOYEE.1,
    ])
    .assert()
    .failure()
    .stderr(contains("Account is inactive"));

    login(&db_path, ADMIN);
    pp().args(["--db", &db_path, "employee", "status", EMPLOYEE.0, "active"])
        .assert()
        .success();
    login(&db_path, EMPLOYEE);
}

#[test]
fn admin_cannot_lock_themselves_out() {
    let db_path = init_demo_db("cli_employee_self");
    login(&db_path, ADMIN);

    pp().args(["--db", &db_path, "employee", "status", ADMIN.0, "inactive"])
        .assert()
        .failure()
        .stderr(contains("cannot deactivate their own account"));

    pp().args(["--db", &db_path, "employee", "remove", ADMIN.0])
        .assert()
        .failure()
        .stderr(contains("cannot remove their own account"));
}

#[test]
fn removed_account_is_gone_from_the_directory() {
    let db_path = init_demo_db("cli_employee_remove");
    login(&db_path, ADMIN);
    add_claire(&db_path).success();

    pp().args(["--db", &db_path, "employee", "remove", "claire@planningpro.com"])
        .assert()
        .success()
        .stdout(contains("Removed Claire Martin"));

    pp().args([
        "--db", &db_path, "login", "--email", "claire@planningpro.com", "--password", "claire42",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid credentials"));
}

#[test]
fn input_is_validated() {
    let db_path = init_demo_db("cli_employee_validation");
    login(&db_path, ADMIN);

    pp().args([
        "--db", &db_path, "employee", "add", "--email", "not-an-email", "--given", "A",
        "--family", "B", "--password", "secret99",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid email address"));

    pp().args([
        "--db", &db_path, "employee", "add", "--email", "x@planningpro.com", "--given", "A",
        "--family", "B", "--password", "secret99", "--role", "manager",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid role"));

    pp().args(["--db", &db_path, "employee", "status", EMPLOYEE.0, "sleeping"])
        .assert()
        .failure()
        .stderr(contains("Invalid account status"));
}

#[test]
fn employees_cannot_manage_accounts() {
    let db_path = init_demo_db("cli_employee_forbidden");
    login(&db_path, EMPLOYEE);

    pp().args(["--db", &db_path, "employee", "list"])
        .assert()
        .failure()
        .stderr(contains("reserved to admin accounts"));
}
