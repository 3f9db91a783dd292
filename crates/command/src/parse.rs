use crate::{
    Command, DEFAULT_LOITER_SECONDS, DEFAULT_MOVE_DISTANCE, DEFAULT_TAKEOFF_ALTITUDE, Direction,
};

// parameter text after trimming; empty means "use the default"
fn parameter_or<T: std::str::FromStr>(parameter: &str, default: T) -> Option<T> {
    if parameter.is_empty() {
        Some(default)
    } else {
        parameter.parse().ok()
    }
}

fn finite(value: Option<f32>) -> Option<f32> {
    value.filter(|v| v.is_finite())
}

fn parse_known(keyword: &str, parameter: &str) -> Option<Command> {
    let moving = |direction| {
        finite(parameter_or(parameter, DEFAULT_MOVE_DISTANCE))
            .map(|distance| Command::Move {
                direction,
                distance,
            })
    };
    match keyword {
        "TAKEOFF" => finite(parameter_or(parameter, DEFAULT_TAKEOFF_ALTITUDE))
            .map(|altitude| Command::Takeoff { altitude }),
        "LAND" => Some(Command::Land),
        "RTL" => Some(Command::ReturnToLaunch),
        "FORWARD" => moving(Direction::Forward),
        "BACKWARD" => moving(Direction::Backward),
        "LEFT" => moving(Direction::Left),
        "RIGHT" => moving(Direction::Right),
        "LOITER" => parameter_or(parameter, DEFAULT_LOITER_SECONDS)
            .map(|duration_seconds| Command::Loiter { duration_seconds }),
        _ => None,
    }
}

/// Parse command text into a `Command`.
///
/// The text is split on the first `:`. The keyword is matched
/// case-insensitively, the parameter is trimmed and, when empty, replaced by
/// the keyword's default. Unknown keywords and malformed parameters both
/// yield `Command::Unknown` carrying the original text; blank input yields
/// `Command::Unknown` with empty text.
pub fn parse(text: &str) -> Command {
    if text.trim().is_empty() {
        return Command::Unknown {
            raw_text: String::new(),
        };
    }
    let (keyword, parameter) = match text.split_once(':') {
        Some((keyword, parameter)) => (keyword, parameter.trim()),
        None => (text, ""),
    };
    let keyword = keyword.trim().to_uppercase();
    match parse_known(&keyword, parameter) {
        Some(command) => command,
        None => {
            log::debug!("unrecognized command text: {:?}", text);
            Command::Unknown {
                raw_text: text.to_string(),
            }
        }
    }
}
