//! Idempotent creation of the four relations at process start.

use sqlx::MySqlPool;

use crate::InfrastructureError;

const CREATE_EMPLOYEES: &str = r#"
    CREATE TABLE IF NOT EXISTS employees (
        id VARCHAR(32) NOT NULL PRIMARY KEY,
        first_name VARCHAR(100) NOT NULL,
        last_name VARCHAR(100) NOT NULL,
        email VARCHAR(255) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL,
        password VARCHAR(255) NOT NULL,
        gender VARCHAR(20) NULL,
        dob VARCHAR(20) NULL,
        permanent_address TEXT NULL,
        current_address TEXT NULL,
        pan_number VARCHAR(20) NULL,
        aadhar_number VARCHAR(20) NULL,
        contactnumber VARCHAR(20) NULL,
        alternate_contact_number VARCHAR(20) NULL,
        alternate_contact_person VARCHAR(100) NULL,
        alternate_contact_relation VARCHAR(50) NULL,
        emergency_number VARCHAR(20) NULL,
        account_number VARCHAR(30) NULL,
        ifsc_code VARCHAR(20) NULL,
        account_holder_name VARCHAR(100) NULL,
        branch VARCHAR(100) NULL,
        department VARCHAR(100) NULL,
        reporting_manager1 VARCHAR(100) NULL,
        reporting_manager1_mail VARCHAR(255) NULL,
        reporting_manager2 VARCHAR(100) NULL,
        reporting_manager2_mail VARCHAR(255) NULL,
        employee_role VARCHAR(100) NULL,
        employment_status VARCHAR(50) NULL,
        join_date VARCHAR(20) NULL,
        user_type VARCHAR(20) NOT NULL DEFAULT 'employee',
        UNIQUE KEY uq_employees_email (email)
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

const CREATE_ATTENDANCE: &str = r#"
    CREATE TABLE IF NOT EXISTS attendance_records (
        record_id VARCHAR(36) NOT NULL PRIMARY KEY,
        employee_id VARCHAR(32) NOT NULL,
        date DATE NOT NULL,
        login_time TIME NOT NULL,
        work_location VARCHAR(100) NOT NULL,
        logout_time TIME NULL,
        KEY idx_attendance_employee (employee_id, date),
        CONSTRAINT fk_attendance_employee FOREIGN KEY (employee_id)
            REFERENCES employees (id) ON DELETE CASCADE
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

const CREATE_NOTIFICATIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS notifications (
        seq BIGINT UNSIGNED NOT NULL AUTO_INCREMENT,
        notification_id VARCHAR(36) NOT NULL,
        employee_id VARCHAR(32) NOT NULL,
        message TEXT NOT NULL,
        is_read BOOLEAN NOT NULL DEFAULT FALSE,
        created_at DATETIME(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6),
        PRIMARY KEY (notification_id),
        UNIQUE KEY uq_notifications_seq (seq),
        KEY idx_notifications_employee (employee_id, is_read)
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

const CREATE_LEAVE_APPLICATIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS leave_applications (
        record_id VARCHAR(36) NOT NULL PRIMARY KEY,
        employee_id VARCHAR(32) NOT NULL,
        leave_type VARCHAR(100) NOT NULL,
        from_date DATE NOT NULL,
        to_date DATE NULL,
        description TEXT NULL,
        status VARCHAR(30) NOT NULL DEFAULT 'Pending',
        submitted_at DATETIME(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6),
        KEY idx_leave_employee (employee_id, submitted_at),
        CONSTRAINT fk_leave_employee FOREIGN KEY (employee_id)
            REFERENCES employees (id) ON DELETE CASCADE
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

/// Statements in dependency order
pub const SCHEMA: [&str; 4] = [
    CREATE_EMPLOYEES,
    CREATE_ATTENDANCE,
    CREATE_NOTIFICATIONS,
    CREATE_LEAVE_APPLICATIONS,
];

/// Create any missing tables
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), InfrastructureError> {
    tracing::info!("Ensuring database schema");
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::info!("Database schema ready");
    Ok(())
}
