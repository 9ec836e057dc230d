use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::domain::Displayable;

use super::{join_text, parse_position};

pub fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("add-task", "Add a task", "add-task <text>", cmd_add_task),
        CommandEntry::new("tasks", "List tasks", "tasks", cmd_tasks),
        CommandEntry::new(
            "edit-task",
            "Start editing a task",
            "edit-task <position>",
            cmd_edit_task,
        ),
        CommandEntry::new(
            "save-task",
            "Save the task being edited with new text",
            "save-task <text>",
            cmd_save_task,
        ),
        CommandEntry::new(
            "cancel-edit",
            "Leave edit mode without saving",
            "cancel-edit",
            cmd_cancel_edit,
        ),
        CommandEntry::new(
            "delete-task",
            "Remove a task",
            "delete-task <position>",
            cmd_delete_task,
        ),
        CommandEntry::new(
            "toggle-task",
            "Mark a task done or not done",
            "toggle-task <position>",
            cmd_toggle_task,
        ),
    ]
}

fn cmd_add_task(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let position = context.tasks.add(&join_text(args))? + 1;
    output::success(format!("Task {position} added."));
    Ok(())
}

fn cmd_tasks(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.tasks.is_empty() {
        output::info("No tasks yet.");
        return Ok(());
    }
    let editing = context.tasks.editing().map(|session| session.index);
    for (index, task) in context.tasks.tasks().iter().enumerate() {
        let marker = if editing == Some(index) { " (editing)" } else { "" };
        output::line(format!("{}. {}{}", index + 1, task.display_label(), marker));
    }
    Ok(())
}

fn cmd_edit_task(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let index = parse_position(args.first(), "edit-task <position>")?;
    let session = context.tasks.begin_edit(index)?;
    output::info(format!(
        "Editing task {}: {}. Use `save-task <text>` or `cancel-edit`.",
        session.index + 1,
        session.draft
    ));
    Ok(())
}

fn cmd_save_task(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if context.tasks.editing().is_none() {
        return Err(CommandError::InvalidArguments(
            "No task is being edited. Use `edit-task <position>` first.".into(),
        ));
    }
    context.tasks.update_draft(&join_text(args))?;
    let task = context.tasks.save_edit()?;
    output::success(format!("Task saved: {}", task.description));
    Ok(())
}

fn cmd_cancel_edit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.tasks.cancel_edit();
    output::info("Edit cancelled.");
    Ok(())
}

fn cmd_delete_task(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let index = parse_position(args.first(), "delete-task <position>")?;
    let removed = context.tasks.delete(index)?;
    output::success(format!("Task removed: {}", removed.description));
    Ok(())
}

fn cmd_toggle_task(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let index = parse_position(args.first(), "toggle-task <position>")?;
    let done = context.tasks.toggle(index)?;
    let state = if done { "done" } else { "not done" };
    output::success(format!("Task {} marked {state}.", index + 1));
    Ok(())
}
