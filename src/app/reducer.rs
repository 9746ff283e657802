use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::{AppState, SPINNER_FRAMES},
};

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            let frame = (state.frame_count % SPINNER_FRAMES.len() as u64) as usize;
            state.spinner = SPINNER_FRAMES[frame].to_string();
            if state.status_ttl > 0 {
                state.status_ttl -= 1;
                if state.status_ttl == 0 {
                    state.status_message = None;
                }
            }
            return None;
        }
        Action::Quit => {
            state.should_quit = true;
            return None;
        }
        Action::Resize(..) => return None,
        _ => {}
    }

    let updaters: [fn(&mut AppState, &Action) -> UpdateResult; 3] = [
        features::search::update,
        features::article::update,
        features::ui::update,
    ];
    for updater in updaters {
        if let UpdateResult::Handled(command) = updater(state, &action) {
            return command;
        }
    }
    None
}

#[cfg(test)]
#[path = "reducer_tests.rs"]
mod tests;
