//! Interactive browsing: one command per input line.

use std::io::{BufRead, Write};

use floorplan_core::{lookup, WalkTimeEstimator};

use crate::view::{render_floor_plan, render_summary, Selection, ViewConfig};

const HELP: &str = "\
Commands:
  <code>     select a location, e.g. I-2-7, I27, or A-3
  clear      clear the current selection
  rotate     toggle the rotated view
  entrance   toggle the entrance view
  map        show the floor plan
  help       show this help
  quit       leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrowseCommand<'a> {
    Search(&'a str),
    Clear,
    Rotate,
    Entrance,
    Map,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<BrowseCommand<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let command = match line.to_ascii_lowercase().as_str() {
        "clear" => BrowseCommand::Clear,
        "rotate" => BrowseCommand::Rotate,
        "entrance" => BrowseCommand::Entrance,
        "map" => BrowseCommand::Map,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "exit" => BrowseCommand::Quit,
        _ => BrowseCommand::Search(line),
    };
    Some(command)
}

/// Run the browse loop until `quit` or end of input.
///
/// Rejected searches print their message and leave the selection unchanged.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub(crate) fn run_browse<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    estimator: &WalkTimeEstimator,
    mut view: ViewConfig,
) -> anyhow::Result<()> {
    let shape = estimator.shape();
    let mut selection = Selection::default();

    writeln!(output, "{}", render_floor_plan(shape, view, None))?;
    writeln!(output, "Type a location code, or `help`.")?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            continue;
        };

        match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => writeln!(output, "{HELP}")?,
            BrowseCommand::Clear => {
                if selection.clear().is_some() {
                    writeln!(output, "Selection cleared.")?;
                } else {
                    writeln!(output, "Nothing selected.")?;
                }
            }
            BrowseCommand::Rotate | BrowseCommand::Entrance | BrowseCommand::Map => {
                view.orientation = match command {
                    BrowseCommand::Rotate => view.orientation.rotate(),
                    BrowseCommand::Entrance => view.orientation.entrance(),
                    _ => view.orientation,
                };
                write!(
                    output,
                    "{}",
                    render_floor_plan(shape, view, selection.coordinate())
                )?;
                if let Some(summary) = selection.current() {
                    write!(output, "{}", render_summary(summary))?;
                }
            }
            BrowseCommand::Search(raw) => match lookup(raw, estimator) {
                Ok(summary) => {
                    write!(
                        output,
                        "{}{}",
                        render_floor_plan(shape, view, Some(&summary.coordinate)),
                        render_summary(&summary)
                    )?;
                    selection.select(summary);
                }
                Err(e) => writeln!(output, "{e}")?,
            },
        }
    }

    Ok(())
}
