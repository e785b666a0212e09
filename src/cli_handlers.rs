use crate::config::Config;
use crate::error::TodoError;
use crate::list::TodoList;
use crate::loader;
use std::path::Path;

/// Handle the show command
pub fn handle_show(
    file: &Path,
    done: bool,
    pending: bool,
    config: &Config,
) -> Result<(), TodoError> {
    let list = loader::load_list(file, config)?;

    let list = if done {
        list.all_done_items()
    } else if pending {
        list.all_not_done_items()
    } else {
        list
    };

    // An empty list renders as the header line, newline included
    let rendered = list.render_with(config.formatter());
    if list.is_empty() {
        print!("{rendered}");
    } else {
        println!("{rendered}");
    }

    Ok(())
}

/// Handle the status command
pub fn handle_status(file: &Path, config: &Config) -> Result<(), TodoError> {
    let list = loader::load_list(file, config)?;
    let done = list.all_done_items().size();

    println!("{done}/{} done", list.size());
    if list.all_done() {
        println!("All done!");
    }

    Ok(())
}

/// Handle the find command
pub fn handle_find(file: &Path, title: &str, config: &Config) -> Result<(), TodoError> {
    let list = loader::load_list(file, config)?;

    match list.find_by_title(title) {
        Some(todo) => {
            let todo = todo.borrow();
            println!("{}", todo.render_with(config.formatter()));
            if !todo.description.is_empty() {
                println!("  {}", todo.description);
            }
        }
        None => println!("No todo titled \"{title}\""),
    }

    Ok(())
}

/// Handle the item command
pub fn handle_item(file: &Path, position: usize, config: &Config) -> Result<(), TodoError> {
    let list = loader::load_list(file, config)?;
    let todo = list.item_at(position)?;

    println!("{}", todo.borrow().render_with(config.formatter()));

    Ok(())
}

/// Changes applied by the export command, in field order
#[derive(Debug, Default)]
pub struct ExportChanges {
    pub mark_done: Vec<String>,
    pub mark_all_done: bool,
    pub mark_all_undone: bool,
    pub remove_at: Option<usize>,
}

/// Apply export changes to a list
pub fn apply_changes(list: &mut TodoList, changes: &ExportChanges) -> Result<(), TodoError> {
    for title in &changes.mark_done {
        if !list.mark_done(title) {
            eprintln!("Warning: no todo titled \"{title}\"");
        }
    }
    if changes.mark_all_done {
        list.mark_all_done();
    }
    if changes.mark_all_undone {
        list.mark_all_undone();
    }
    if let Some(position) = changes.remove_at {
        list.remove_at(position)?;
    }
    Ok(())
}

/// Handle the export command
pub fn handle_export(
    file: &Path,
    changes: &ExportChanges,
    config: &Config,
) -> Result<(), TodoError> {
    let mut list = loader::load_list(file, config)?;
    apply_changes(&mut list, changes)?;

    println!("{}", loader::to_json(&list)?);

    Ok(())
}
