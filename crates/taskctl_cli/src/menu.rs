//! Menu loops driving the interactive session.
//!
//! # Responsibility
//! - Own the main/task/view menu flow and per-operation outcome messages.
//! - Route every mutation through the store; operation failures are
//!   reported and never end the session.

use crate::input;
use crate::render;
use log::{info, warn};
use std::io;
use taskctl_core::{ordered, TaskOrdering, TaskStore};

const MAIN_MENU: [&str; 4] = [
    "Create | Read | Update | Delete Tasks",
    "View Tasks",
    "Clear Tasks",
    "Exit",
];

const TASK_MENU: [&str; 5] = [
    "Create Task",
    "Read Task",
    "Update Task",
    "Delete Task",
    "Go back to main menu",
];

const VIEW_MENU: [&str; 5] = [
    "View All",
    "View by Priority",
    "View by Status",
    "View by Due Date",
    "Go Back to main menu",
];

/// Runs the session until the user picks Exit or stdin closes.
pub fn run_session(store: &mut TaskStore) -> io::Result<()> {
    info!(
        "event=session_start module=cli status=ok count={}",
        store.len()
    );

    loop {
        render::banner()?;
        match input::select("Welcome to the Task Manager", &MAIN_MENU)? {
            0 => task_menu(store)?,
            1 => view_menu(store)?,
            2 => {
                render::clear_screen()?;
                clear_tasks(store);
                render::pause()?;
            }
            _ => {
                render::clear_screen()?;
                println!("Exiting... Thanks for using taskctl!");
                info!(
                    "event=session_end module=cli status=ok count={}",
                    store.len()
                );
                return Ok(());
            }
        }
    }
}

fn task_menu(store: &mut TaskStore) -> io::Result<()> {
    loop {
        render::banner()?;
        match input::select("Task Management Menu", &TASK_MENU)? {
            0 => create_task(store)?,
            1 => read_task(store)?,
            2 => update_task(store)?,
            3 => delete_task(store)?,
            _ => return Ok(()),
        }
    }
}

fn view_menu(store: &TaskStore) -> io::Result<()> {
    loop {
        render::banner()?;
        let ordering = match input::select("View Tasks Menu", &VIEW_MENU)? {
            0 => TaskOrdering::Insertion,
            1 => TaskOrdering::Priority,
            2 => TaskOrdering::Status,
            3 => TaskOrdering::DueDate,
            _ => return Ok(()),
        };

        render::banner()?;
        if store.is_empty() {
            println!("No tasks found.");
        } else {
            render::table(&ordered(store.tasks(), ordering));
        }
        render::pause()?;
    }
}

fn create_task(store: &mut TaskStore) -> io::Result<()> {
    render::banner()?;
    let name = input::read_task_name()?;
    let priority = input::read_priority()?;
    let due_date = input::read_due_date()?;

    match store.create(name, priority, due_date) {
        Ok(index) => {
            println!("Task added!");
            info!("event=task_create module=cli status=ok index={index} priority={priority}");
        }
        Err(err) => {
            println!("Could not save the new task: {err}");
            warn!("event=task_create module=cli status=error error={err}");
        }
    }
    render::pause()
}

fn read_task(store: &TaskStore) -> io::Result<()> {
    render::clear_screen()?;
    let index = match input::read_index(store.len())? {
        Some(index) => index,
        None => return render::pause(),
    };

    match store.get(index) {
        Ok(task) => render::single(index, task),
        Err(err) => println!("Could not read the task: {err}"),
    }
    render::pause()
}

fn update_task(store: &mut TaskStore) -> io::Result<()> {
    render::clear_screen()?;
    let index = match input::read_index(store.len())? {
        Some(index) => index,
        None => return render::pause(),
    };

    match store.toggle_done(index) {
        Ok(()) => {
            println!("Task updated!");
            info!("event=task_toggle module=cli status=ok index={index}");
        }
        Err(err) => {
            println!("Could not update the task: {err}");
            warn!("event=task_toggle module=cli status=error index={index} error={err}");
        }
    }
    render::pause()
}

fn delete_task(store: &mut TaskStore) -> io::Result<()> {
    render::clear_screen()?;
    let index = match input::read_index(store.len())? {
        Some(index) => index,
        None => return render::pause(),
    };

    match store.delete(index) {
        Ok(_) => {
            println!("Task deleted!");
            info!(
                "event=task_delete module=cli status=ok index={index} remaining={}",
                store.len()
            );
        }
        Err(err) => {
            println!("Could not delete the task: {err}");
            warn!("event=task_delete module=cli status=error index={index} error={err}");
        }
    }
    render::pause()
}

fn clear_tasks(store: &mut TaskStore) {
    match store.clear() {
        Ok(()) => {
            println!("Tasks cleared!");
            info!("event=tasks_clear module=cli status=ok");
        }
        Err(err) => {
            println!("Could not clear tasks: {err}");
            warn!("event=tasks_clear module=cli status=error error={err}");
        }
    }
}
