use serde::Serialize;

use crate::commands::{current_thread_runtime, load_config, CommandResult};
use leavedesk_core::domain::leave::LeaveApplication;
use leavedesk_db::{
    connect_with_settings, leave_applications_columns, leave_applications_table_exists,
    LeaveApplicationRepository, SqlLeaveApplicationRepository,
};

const BANNER_WIDTH: usize = 50;

#[derive(Debug, Serialize)]
struct ApplicationsReport {
    command: &'static str,
    status: &'static str,
    columns: Vec<String>,
    count: usize,
    applications: Vec<LeaveApplication>,
}

pub fn run(json_output: bool) -> CommandResult {
    let config = match load_config("applications") {
        Ok(config) => config,
        Err(failure) => return failure,
    };

    let runtime = match current_thread_runtime("applications") {
        Ok(runtime) => runtime,
        Err(failure) => return failure,
    };

    let result = runtime.block_on(async {
        let pool =
            connect_with_settings(&config.database.url, 1, config.database.timeout_secs, false)
                .await
                .map_err(|error| ("db_connectivity", error.to_string(), 4u8))?;

        let has_table = leave_applications_table_exists(&pool)
            .await
            .map_err(|error| ("db_query", error.to_string(), 4u8))?;
        if !has_table {
            pool.close().await;
            return Err((
                "schema_missing",
                "leave_applications table not found; run `leavedesk migrate` first".to_string(),
                5u8,
            ));
        }

        let columns = leave_applications_columns(&pool)
            .await
            .map_err(|error| ("db_query", error.to_string(), 4u8))?;
        pool.close().await;

        let repository =
            SqlLeaveApplicationRepository::new(&config.database.url, config.database.timeout_secs);
        let applications = repository
            .list_applications()
            .await
            .map_err(|error| ("db_query", error.to_string(), 4u8))?;

        Ok::<_, (&'static str, String, u8)>((columns, applications))
    });

    let (columns, applications) = match result {
        Ok(listing) => listing,
        Err((error_class, message, exit_code)) => {
            return CommandResult::failure("applications", error_class, message, exit_code);
        }
    };

    let report = ApplicationsReport {
        command: "applications",
        status: "ok",
        count: applications.len(),
        columns,
        applications,
    };

    if json_output {
        return match serde_json::to_string_pretty(&report) {
            Ok(output) => CommandResult { exit_code: 0, output },
            Err(error) => CommandResult::failure("applications", "serialization", error.to_string(), 1),
        };
    }

    CommandResult { exit_code: 0, output: render_human(&report) }
}

fn render_human(report: &ApplicationsReport) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    let title = format!("{:^width$}", "LEAVE APPLICATIONS IN DATABASE", width = BANNER_WIDTH);

    let mut lines = vec![rule.clone(), title, rule.clone()];
    lines.push(format!("Columns: {}", report.columns.join(", ")));

    for application in &report.applications {
        lines.push(String::new());
        lines.push("Record:".to_string());
        lines.push(format!("  id: {}", application.id));
        lines.push(format!("  leave_type: {}", application.leave_type));
        lines.push(format!("  start_date: {}", application.start_date));
        lines.push(format!("  end_date: {}", application.end_date));
        lines.push(format!("  reason: {}", application.reason));
        lines.push(format!("  leave_days: {}", application.leave_days));
    }

    lines.push(String::new());
    lines.push(format!("{} application(s)", report.count));
    lines.push(rule);
    lines.join("\n")
}
