pub mod connection;
pub mod migrations;
pub mod repositories;

pub use connection::{connect, connect_with_settings, open_connection, ping, DbPool};
pub use migrations::{
    leave_applications_columns, leave_applications_table_exists, run_pending,
    LEAVE_APPLICATIONS_TABLE,
};
pub use repositories::{
    InMemoryLeaveApplicationRepository, LeaveApplicationRepository, RepositoryError,
    SqlLeaveApplicationRepository,
};
