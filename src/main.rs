use clap::Parser;
use tracing::{debug, info};

use catering_order_rs::cli::{Cli, Command};
use catering_order_rs::costing::{
    regenerate, reprice_order, CostingConfig, OrderLineEditor, RegenerateMode, UnitTable,
};
use catering_order_rs::error::{CateringError, Result};
use catering_order_rs::interface::{
    display_order, display_unit_table, prompt_yes_no, resolve_reference, Reference,
};
use catering_order_rs::models::GeneratedOrder;
use catering_order_rs::state::{
    load_catalog, load_customers, save_customers, Catalog, CustomerStore,
};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_level())
        .with_target(cli.verbose >= 2)
        .with_line_number(cli.verbose >= 3)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Everything a command needs once the files are loaded.
struct Session {
    cli: Cli,
    config: CostingConfig,
    catalog: Catalog,
    store: CustomerStore,
}

fn run(cli: Cli) -> Result<()> {
    let units = match &cli.units {
        Some(path) => UnitTable::from_json_file(path)?,
        None => UnitTable::default(),
    };
    let config = CostingConfig {
        units,
        language: cli.language.clone(),
    };

    if matches!(cli.command, Command::Units) {
        display_unit_table(&config.units);
        return Ok(());
    }

    let catalog = load_catalog(&cli.catalog)?;
    let store = CustomerStore::new(load_customers(&cli.customers)?);
    let (ingredients, cooking_items, dishes) = catalog.counts();
    info!(
        "Loaded {} ingredients, {} cooking items, {} dishes, {} customers",
        ingredients,
        cooking_items,
        dishes,
        store.len()
    );

    let mut session = Session {
        cli,
        config,
        catalog,
        store,
    };

    match &session.cli.command {
        Command::Generate { customer, reprice } => {
            let customer = customer.clone();
            let mode = if *reprice {
                RegenerateMode::Reprice
            } else {
                RegenerateMode::Full
            };
            cmd_generate(&mut session, &customer, mode)
        }
        Command::Show { customer } => cmd_show(&session, customer),
        Command::AddIngredient {
            customer,
            ingredient,
            quantity,
            unit,
        } => {
            let (customer, ingredient, quantity, unit) =
                (customer.clone(), ingredient.clone(), *quantity, unit.clone());
            let Some(ingredient_id) = resolve_ingredient(&session, &ingredient)? else {
                return Ok(());
            };
            apply_edit(&mut session, &customer, |editor, order| {
                editor.add_or_update_ingredient_line(order, &ingredient_id, quantity, &unit)
            })
        }
        Command::EditIngredient {
            customer,
            line,
            quantity,
            unit,
        } => {
            let (customer, line, quantity, unit) =
                (customer.clone(), line.clone(), *quantity, unit.clone());
            apply_edit(&mut session, &customer, |editor, order| {
                editor.update_ingredient_line_by_id(order, &line, quantity, &unit)
            })
        }
        Command::RemoveIngredient { customer, line } => {
            let (customer, line) = (customer.clone(), line.clone());
            apply_edit(&mut session, &customer, |editor, order| {
                editor.delete_ingredient_line_by_id(order, &line)
            })
        }
        Command::AddCookingItem {
            customer,
            item,
            quantity,
        } => {
            let (customer, item, quantity) = (customer.clone(), item.clone(), *quantity);
            let Some(item_id) = resolve_cooking_item(&session, &item)? else {
                return Ok(());
            };
            apply_edit(&mut session, &customer, |editor, order| {
                editor.add_or_update_cooking_item_line(order, &item_id, quantity)
            })
        }
        Command::EditCookingItem {
            customer,
            line,
            quantity,
        } => {
            let (customer, line, quantity) = (customer.clone(), line.clone(), *quantity);
            apply_edit(&mut session, &customer, |editor, order| {
                editor.update_cooking_item_line_by_id(order, &line, quantity)
            })
        }
        Command::RemoveCookingItem { customer, line } => {
            let (customer, line) = (customer.clone(), line.clone());
            apply_edit(&mut session, &customer, |editor, order| {
                editor.delete_cooking_item_line_by_id(order, &line)
            })
        }
        Command::Units => Ok(()),
    }
}

/// Regenerate a customer's order from their selections.
fn cmd_generate(session: &mut Session, customer: &str, mode: RegenerateMode) -> Result<()> {
    let record = session.store.require(customer)?;
    let context = record.order_context()?;

    let order = regenerate(
        record.generated_order.as_ref(),
        &context,
        &session.catalog,
        &session.config,
        mode,
    )?;

    display_order(&order, &format!("Order for {}", record_title(session, customer)));
    commit(session, customer, order)
}

/// Show the saved order of a customer.
fn cmd_show(session: &Session, customer: &str) -> Result<()> {
    match session.store.order(customer)? {
        Some(order) => {
            display_order(order, &format!("Order for {}", record_title(session, customer)))
        }
        None => println!("No order generated yet. Run 'generate --customer {}'.", customer),
    }
    Ok(())
}

/// Apply one line edit, reprice, show and save.
///
/// A missing line is reported but not treated as a failure.
fn apply_edit<F>(session: &mut Session, customer: &str, edit: F) -> Result<()>
where
    F: FnOnce(&OrderLineEditor, &GeneratedOrder) -> Result<GeneratedOrder>,
{
    let current = session.store.order(customer)?.cloned().unwrap_or_default();
    let editor = OrderLineEditor::new(&session.catalog, &session.config);

    let edited = match edit(&editor, &current) {
        Ok(order) => order,
        Err(CateringError::LineNotFound(line_id)) => {
            println!("Line '{}' not found in the order; nothing changed.", line_id);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let order = reprice_order(&edited, &session.catalog, &session.config);
    debug!(
        "Order total {:.3} -> {:.3}",
        current.total_order_cost, order.total_order_cost
    );

    display_order(&order, &format!("Order for {}", record_title(session, customer)));
    commit(session, customer, order)
}

/// Attach the order to the customer and persist the store.
fn commit(session: &mut Session, customer: &str, order: GeneratedOrder) -> Result<()> {
    session.store.attach_order(customer, order)?;

    let save = session.cli.yes || prompt_yes_no("Save order?", true)?;
    if save {
        save_customers(&session.cli.customers, &session.store.to_records())?;
        println!("Order saved.");
    }
    Ok(())
}

fn resolve_ingredient(session: &Session, input: &str) -> Result<Option<String>> {
    let references: Vec<Reference> = session
        .catalog
        .all_ingredients()
        .into_iter()
        .map(|i| Reference {
            id: &i.id,
            name: &i.name,
        })
        .collect();
    resolve_reference(&references, input, &session.config.language, "ingredient")
}

fn resolve_cooking_item(session: &Session, input: &str) -> Result<Option<String>> {
    let references: Vec<Reference> = session
        .catalog
        .all_cooking_items()
        .into_iter()
        .map(|c| Reference {
            id: &c.id,
            name: &c.name,
        })
        .collect();
    resolve_reference(&references, input, &session.config.language, "cooking item")
}

fn record_title(session: &Session, customer: &str) -> String {
    match session.store.get(customer) {
        Some(record) if !record.name.is_empty() => format!("{} ({})", record.name, record.id),
        _ => customer.to_string(),
    }
}
