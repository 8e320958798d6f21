use colored::Colorize;
use zoneflow_cloud::{ActionType, ApplyResult, Plan, RuleMode};

/// Print the planned calls grouped by zone
pub fn print_plan(plan: &Plan, mode: RuleMode) {
    println!();
    println!(
        "{} ({}): {}",
        "Plan".bold(),
        format!("rule mode: {}", mode).dimmed(),
        plan.summary()
    );

    let mut current_zone: Option<&str> = None;
    for action in &plan.actions {
        if current_zone != Some(action.zone.as_str()) {
            let target = action.zone_id.as_deref().unwrap_or("new");
            println!("  {} ({})", action.zone.cyan(), target);
            current_zone = Some(action.zone.as_str());
        }

        let marker = match action.action_type {
            ActionType::Create => "+".green(),
            ActionType::Update => "~".yellow(),
        };
        println!("    {} {}", marker, action.description);
    }
}

pub fn print_apply_result(result: &ApplyResult) {
    println!();
    println!(
        "{}",
        format!(
            "✓ {} API calls applied in {}ms",
            result.succeeded.len(),
            result.duration_ms
        )
        .green()
        .bold()
    );
}
