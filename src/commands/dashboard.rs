use clap::{Args, Subcommand};

use super::print_toasts;
use crate::api::NutritionApi;
use crate::models::{Dashboard, NutritionPlan};
use crate::state::AppContainer;

/// View and refresh the dashboard
#[derive(Args)]
pub struct DashboardCommand {
    #[command(subcommand)]
    command: DashboardSubcommand,
}

#[derive(Subcommand)]
enum DashboardSubcommand {
    /// Recalculate the plan and fetch a fresh dashboard snapshot
    Refresh,

    /// Show the last fetched snapshot
    Show,

    /// Show the current nutrition plan
    Plan,
}

impl DashboardCommand {
    pub async fn run<A: NutritionApi>(
        &self,
        container: &mut AppContainer<A>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            DashboardSubcommand::Refresh => {
                container.refresh_dashboard().await;
            }
            DashboardSubcommand::Show => match &container.state().dashboard {
                Some(dashboard) => print_dashboard(dashboard),
                None => println!("No dashboard yet. Run 'nica dashboard refresh' first."),
            },
            DashboardSubcommand::Plan => match &container.state().plan {
                Some(plan) => print_plan(plan),
                None => println!("No plan yet. Run 'nica dashboard refresh' first."),
            },
        }
        print_toasts(container);
        Ok(())
    }
}

fn print_dashboard(dashboard: &Dashboard) {
    println!("Dashboard for {}", dashboard.user);
    println!("{}", "=".repeat(14 + dashboard.user.len()));

    if !dashboard.cards.is_empty() {
        println!("\nCards:");
        for card in &dashboard.cards {
            let arrow = if card.positive { "+" } else { "-" };
            println!("  {:24} {:>10} ({}{})", card.label, card.value, arrow, card.delta);
        }
    }

    if !dashboard.today.metrics.is_empty() {
        println!("\nToday:");
        for metric in &dashboard.today.metrics {
            println!(
                "  {:24} {:>7.1}/{:<7.1} {}",
                metric.label, metric.current, metric.target, metric.unit
            );
        }
        let hydration = &dashboard.today.hydration;
        println!(
            "  {:24} {:>7.1}/{:<7.1} {}",
            hydration.label, hydration.current, hydration.target, hydration.unit
        );
    }

    if !dashboard.week.bars.is_empty() {
        println!("\nWeek:");
        for bar in &dashboard.week.bars {
            println!("  {:10} {:>6.0} kcal ({:?})", bar.day, bar.calories, bar.status);
        }
    }

    if !dashboard.alerts.is_empty() {
        println!("\nAlerts:");
        for alert in &dashboard.alerts {
            println!("  [{}] {}: {}", alert.severity, alert.title, alert.detail);
        }
    }

    for message in &dashboard.coach_messages {
        println!("\nCoach [{}]: {}", message.severity, message.title);
        println!("  {}", message.body);
    }

    if !dashboard.last_updated.is_empty() {
        println!("\nLast updated: {}", dashboard.last_updated);
    }
}

fn print_plan(plan: &NutritionPlan) {
    println!("Nutrition plan for {}", plan.user);
    println!("{}", "=".repeat(19 + plan.user.len()));
    println!(
        "Target: {:.0} kcal (TMB {:.0}, GET {:.0}, adjustment {:+.0})",
        plan.caloric_profile.target_calories,
        plan.caloric_profile.tmb,
        plan.caloric_profile.get,
        plan.caloric_profile.adjustment_kcal
    );
    println!(
        "Macros: {:.0} kcal / {:.0}g protein / {:.0}g carbs / {:.0}g fats",
        plan.macro_targets.calories,
        plan.macro_targets.protein_g,
        plan.macro_targets.carbs_g,
        plan.macro_targets.fats_g
    );

    for day in &plan.days {
        println!("\n{} ({:.0} ml water)", day.day, day.hydration_ml);
        for meal in &day.meals {
            println!(
                "  {:8} {:20} {:>5.0} kcal  {}",
                meal.time,
                meal.label,
                meal.calories,
                meal.items.join(", ")
            );
        }
    }

    if !plan.shopping_list.is_empty() {
        println!("\nShopping list:");
        for category in &plan.shopping_list {
            println!("  {}: {}", category.name, category.items.join(", "));
        }
    }

    if !plan.substitutions.is_empty() {
        println!("\nSubstitutions:");
        for sub in &plan.substitutions {
            println!(
                "  {} -> {} or {} ({})",
                sub.item, sub.substitution_1, sub.substitution_2, sub.equivalence
            );
        }
    }

    if !plan.free_meal.is_empty() {
        println!("\nFree meal: {}", plan.free_meal);
    }
    for tip in &plan.adherence_tips {
        println!("Tip: {}", tip);
    }
}
