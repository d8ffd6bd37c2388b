use std::path::Path;

use clap::Parser;
use tracing::debug;

use fitness_meal_tracker_rs::cli::{Cli, Command};
use fitness_meal_tracker_rs::config::resolve_data_file;
use fitness_meal_tracker_rs::error::{Result, TrackerError};
use fitness_meal_tracker_rs::interface::{
    FoodItemFields, can_add_food_item, can_add_meal, can_remove_food_item, can_remove_meal,
    display_daily_summary, draft_from_fields, export_csv, prompt_food_item, prompt_yes_no,
    select_food_item, select_meal,
};
use fitness_meal_tracker_rs::logging;
use fitness_meal_tracker_rs::models::{Meal, UserGoal};
use fitness_meal_tracker_rs::state::{JsonMealRepository, MealService};

type Service = MealService<JsonMealRepository>;

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let goal = cli.goals.settings().to_goal()?;
    let path = resolve_data_file(cli.file);
    debug!(path = %path.display(), "using data file");

    let mut service = MealService::new(JsonMealRepository::new(path)?);
    service.load_meals()?;

    match cli.command.unwrap_or_default() {
        Command::Show => {
            display_daily_summary(service.daily_summary(), &goal);
            Ok(())
        }
        Command::AddMeal { name } => cmd_add_meal(&mut service, &goal, &name),
        Command::RemoveMeal { meal } => cmd_remove_meal(&mut service, &goal, &meal),
        Command::AddFood { meal, food } => cmd_add_food(&mut service, &goal, &meal, food.into()),
        Command::RemoveFood { meal, item } => cmd_remove_food(&mut service, &goal, &meal, item),
        Command::Clear { yes } => cmd_clear(&mut service, yes),
        Command::Export { path } => cmd_export(&service, &path),
    }
}

/// Persist and show the day after a mutating command.
fn save_and_show(service: &Service, goal: &UserGoal) -> Result<()> {
    service.save_meals()?;
    display_daily_summary(service.daily_summary(), goal);
    Ok(())
}

fn cmd_add_meal(service: &mut Service, goal: &UserGoal, name: &str) -> Result<()> {
    if !can_add_meal(name) {
        return Err(TrackerError::InvalidArgument(
            "Meal name cannot be empty".to_string(),
        ));
    }

    service.add_meal(Meal::new(name));
    println!("Added meal '{}'.", name);
    save_and_show(service, goal)
}

fn cmd_remove_meal(service: &mut Service, goal: &UserGoal, selector: &str) -> Result<()> {
    let id = select_meal(service.all_meals(), selector)?;
    if !can_remove_meal(service.meal(id).map(Meal::id)) {
        return Err(TrackerError::InvalidArgument(format!(
            "No meal matches '{}'",
            selector
        )));
    }

    let name = service
        .meal(id)
        .map(|m| m.name().to_string())
        .unwrap_or_default();
    if service.remove_meal(id) {
        println!("Removed meal '{}'.", name);
    }
    save_and_show(service, goal)
}

fn cmd_add_food(
    service: &mut Service,
    goal: &UserGoal,
    selector: &str,
    fields: FoodItemFields,
) -> Result<()> {
    let id = select_meal(service.all_meals(), selector)?;

    let draft = if fields.is_complete() {
        draft_from_fields(&fields)
    } else {
        prompt_food_item(&fields)?
    };

    if !can_add_food_item(Some(id), &draft) {
        return Err(TrackerError::InvalidArgument(
            "A food item needs a name and numeric calories, protein, carbs and fat".to_string(),
        ));
    }
    let item = draft.parse()?;

    let meal = service.meal_mut(id).ok_or_else(|| {
        TrackerError::InvalidArgument(format!("No meal matches '{}'", selector))
    })?;
    println!("Added {} to '{}'.", item.debug_string(), meal.name());
    meal.add_food_item(item);

    save_and_show(service, goal)
}

fn cmd_remove_food(
    service: &mut Service,
    goal: &UserGoal,
    selector: &str,
    position: usize,
) -> Result<()> {
    let meal_id = select_meal(service.all_meals(), selector)?;
    let meal = service.meal_mut(meal_id).ok_or_else(|| {
        TrackerError::InvalidArgument(format!("No meal matches '{}'", selector))
    })?;

    let item_id = select_food_item(meal, position)?;
    let selected_item = meal.item(item_id).map(|item| item.id());
    if !can_remove_food_item(Some(meal_id), selected_item) {
        return Err(TrackerError::InvalidArgument(format!(
            "No item #{} in '{}'",
            position,
            meal.name()
        )));
    }

    if meal.remove_food_item(item_id) {
        println!("Removed item #{} from '{}'.", position, meal.name());
    }

    save_and_show(service, goal)
}

fn cmd_clear(service: &mut Service, yes: bool) -> Result<()> {
    if service.all_meals().is_empty() {
        println!("No meals to clear.");
        return Ok(());
    }

    let confirmed = yes
        || prompt_yes_no(
            &format!("Remove all {} meals logged today?", service.all_meals().len()),
            false,
        )?;
    if !confirmed {
        println!("Nothing changed.");
        return Ok(());
    }

    service.clear_meals();
    service.save_meals()?;
    println!("Cleared all meals.");
    Ok(())
}

fn cmd_export(service: &Service, path: &Path) -> Result<()> {
    export_csv(service.daily_summary(), path)?;
    println!(
        "Exported {} meals to {}.",
        service.all_meals().len(),
        path.display()
    );
    Ok(())
}
