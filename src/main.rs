use clap::Parser;
use fieldgen::prelude::*;
use itertools::Itertools;
use std::fs;
use std::io::{self, Write};

/// An interactive tool for deriving new categorical field values from an
/// event field map
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The field map document as a JSON string
    document: Option<String>,

    /// Read the field map document from a file instead
    #[arg(short, long)]
    file: Option<String>,
}

// All prompts and notices go to stderr; stdout carries only the output
// document, which the calling process parses after the session ends.

fn main() {
    let cli = Cli::parse();

    let document = match (cli.document, cli.file) {
        (Some(document), _) => document,
        (None, Some(path)) => fs::read_to_string(&path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read field map file '{}': {}", path, e))
        }),
        (None, None) => exit_with_error(&InputError::MissingArgument.to_string()),
    };

    let catalog =
        FieldCatalog::load(&document).unwrap_or_else(|e| exit_with_error(&e.to_string()));

    eprintln!("--- Create new field \"{}\" ---", catalog.new_field_name());

    let mut controller = WorkflowController::new(catalog);

    loop {
        eprintln!("\nHow would you like to generate the new value?");
        eprintln!("  1: Combine multiple values of a field into one");
        eprintln!("  2: Associate one value of a field with values of another field");
        eprintln!("  3: Review current values");
        eprintln!("  4: Remove a value");
        eprintln!("  5: Done");
        let choice = prompt_for_input("Enter choice", Some("5"));

        match choice.trim() {
            "1" => run_single_combination(&mut controller),
            "2" => run_double_combination(&mut controller),
            "3" => review_values(&controller),
            "4" => remove_value(&mut controller),
            "5" => break,
            _ => eprintln!("Invalid choice. Please enter a number from 1 to 5."),
        }
    }

    match controller.into_registry().to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => exit_with_error(&format!("Failed to serialize output document: {}", e)),
    }
}

/// One field, several of its values, one user-entered name.
fn run_single_combination(controller: &mut WorkflowController) {
    controller.abandon();

    let Some(field) = prompt_field(controller.catalog(), "Select the event field") else {
        return;
    };
    let values = prompt_values(controller.catalog(), &field, "Select values (e.g. 1,3)");
    let name = prompt_for_input("New value name", None);

    if let Err(e) = controller.select_values(&field, &values) {
        eprintln!("Notice: {}", e);
        return;
    }
    match controller.commit_pending(&name) {
        Ok(()) => eprintln!("Added new value '{}'.", name),
        Err(e) => eprintln!("Notice: {}", e),
    }
}

/// One value of a main field crossed with several values of another field,
/// producing one combination per associated value.
fn run_double_combination(controller: &mut WorkflowController) {
    let Some(main_field) = prompt_field(controller.catalog(), "Select the main field") else {
        return;
    };
    let main_values = prompt_values(
        controller.catalog(),
        &main_field,
        "Select one main value (e.g. 1)",
    );
    let Some(main_value) = main_values.into_iter().next() else {
        eprintln!("Notice: a main value is required.");
        return;
    };

    let Some(associated_field) = prompt_field(controller.catalog(), "Select the additional field")
    else {
        return;
    };
    let associated_values = prompt_values(
        controller.catalog(),
        &associated_field,
        "Select values (e.g. 1,3)",
    );
    if associated_values.is_empty() {
        eprintln!("Notice: at least one associated value is required.");
        return;
    }

    let strategy = prompt_strategy(&main_field, &main_value, &associated_field, &associated_values);

    let combination = DoubleCombination {
        main_field,
        main_value,
        associated_field,
        associated_values,
        strategy,
    };

    match controller.commit_double(&combination) {
        Ok(report) => {
            for name in &report.committed {
                eprintln!("Added new value '{}'.", name);
            }
            for (name, error) in &report.failures {
                eprintln!("Notice: '{}' was not added: {}", name, error);
            }
        }
        Err(e) => eprintln!("Notice: {}", e),
    }
}

/// Prompts for one of the three naming strategies, phrased in terms of the
/// chosen fields as the original dialog did.
fn prompt_strategy(
    main_field: &str,
    main_value: &str,
    associated_field: &str,
    associated_values: &[String],
) -> NamingStrategy {
    loop {
        eprintln!("\nHow would you like to generate new name(s) for the new value(s)?");
        eprintln!(
            "  1: Append the value of {} to the values of {}",
            main_field, associated_field
        );
        eprintln!(
            "  2: Append the values of {} to the value of {}",
            associated_field, main_field
        );
        eprintln!("  3: Enter manually");
        let choice = prompt_for_input("Enter choice", Some("1"));

        match choice.trim() {
            "1" => break NamingStrategy::AppendAssociatedToMain,
            "2" => break NamingStrategy::AppendMainToAssociated,
            "3" => {
                let names = associated_values
                    .iter()
                    .map(|value| {
                        prompt_for_input(
                            &format!("Name for {} + {}", main_value, value),
                            None,
                        )
                    })
                    .collect();
                break NamingStrategy::Manual(names);
            }
            _ => eprintln!("Invalid choice. Please enter 1, 2 or 3."),
        }
    }
}

/// Lists the committed value names and shows the field map of a chosen one.
fn review_values(controller: &WorkflowController) {
    let registry = controller.registry();
    if registry.is_empty() {
        eprintln!("No new values have been added yet.");
        return;
    }

    eprintln!("\nNew event values:");
    for (index, name) in registry.names().enumerate() {
        eprintln!("  {}: {}", index + 1, name);
    }

    let choice = prompt_for_input("Show associated values for (blank to go back)", None);
    if choice.is_empty() {
        return;
    }
    let Some(name) = pick_by_number_or_name(registry.names(), &choice) else {
        eprintln!("Notice: no value named '{}'.", choice);
        return;
    };
    // `get` cannot miss here: `name` came from the registry's own name list.
    if let Some(field_map) = registry.get(&name) {
        for (field, values) in field_map {
            eprintln!("  {}: {}", field, values.iter().join(", "));
        }
    }
}

fn remove_value(controller: &mut WorkflowController) {
    if controller.registry().is_empty() {
        eprintln!("No new values have been added yet.");
        return;
    }

    eprintln!("\nNew event values:");
    for (index, name) in controller.registry().names().enumerate() {
        eprintln!("  {}: {}", index + 1, name);
    }

    let choice = prompt_for_input("Remove which value (blank to go back)", None);
    if choice.is_empty() {
        return;
    }
    match pick_by_number_or_name(controller.registry().names(), &choice) {
        Some(name) => {
            controller.remove_combination(&name);
            eprintln!("Removed '{}'.", name);
        }
        None => eprintln!("Notice: no value named '{}'.", choice),
    }
}

/// Lists the catalog's fields and prompts for one, by number or by name.
fn prompt_field(catalog: &FieldCatalog, prompt_text: &str) -> Option<String> {
    eprintln!("\nEvent fields:");
    for (index, field) in catalog.field_names().enumerate() {
        eprintln!("  {}: {}", index + 1, field);
    }

    let choice = prompt_for_input(prompt_text, None);
    let picked = pick_by_number_or_name(catalog.field_names(), &choice);
    if picked.is_none() {
        eprintln!("Notice: no field named '{}'.", choice);
    }
    picked
}

/// Lists a field's legal values and prompts for a comma-separated selection.
fn prompt_values(catalog: &FieldCatalog, field: &str, prompt_text: &str) -> Vec<String> {
    // The field was picked from the catalog's own list, so the lookup
    // cannot fail for wizard-driven input.
    let Ok(legal_values) = catalog.values_of(field) else {
        return Vec::new();
    };

    eprintln!("\nValues of {}:", field);
    for (index, value) in legal_values.iter().enumerate() {
        eprintln!("  {}: {}", index + 1, value);
    }

    let choice = prompt_for_input(prompt_text, None);
    choice
        .split(',')
        .filter_map(|part| part.trim().parse::<usize>().ok())
        .filter_map(|number| number.checked_sub(1))
        .filter_map(|index| legal_values.get(index))
        .cloned()
        .collect()
}

/// Resolves a 1-based list number or a literal name against `names`.
fn pick_by_number_or_name<'a>(
    names: impl Iterator<Item = &'a str> + Clone,
    choice: &str,
) -> Option<String> {
    let choice = choice.trim();
    if let Ok(number) = choice.parse::<usize>() {
        if let Some(name) = names.clone().nth(number.checked_sub(1)?) {
            return Some(name.to_string());
        }
    }
    names
        .clone()
        .find(|name| *name == choice)
        .map(|name| name.to_string())
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    eprint!("> {}{}: ", prompt_text, default_prompt);
    io::stderr().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
