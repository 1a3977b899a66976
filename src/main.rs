use std::path::PathBuf;
use std::process::ExitCode;

use numplane::{
    Complex, FrameDriver, FrameSignal, FrameSnapshot, Options, PlaneCommand,
    PlaneError, PlaneSession,
};

const USAGE: &str =
    "Usage: numplane [--real] [--options FILE] <add|mul> <value>...";

struct Args {
    real_mode: bool,
    options: Option<PathBuf>,
    command: PlaneCommand,
    values: Vec<Complex>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut real_mode = false;
    let mut options = None;
    let mut command = None;
    let mut values = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--real" => real_mode = true,
            "--options" => {
                let path = args.next().ok_or("--options needs a file")?;
                options = Some(PathBuf::from(path));
            }
            "add" if command.is_none() => command = Some(PlaneCommand::Add),
            "mul" if command.is_none() => command = Some(PlaneCommand::Multiply),
            _ if command.is_some() => {
                values.push(arg.parse::<Complex>().map_err(|e| e.to_string())?);
            }
            other => return Err(format!("unexpected argument {other:?}")),
        }
    }

    let command = command.ok_or("missing operation")?;
    Ok(Args {
        real_mode,
        options,
        command,
        values,
    })
}

/// Headless host: counts frames and traces each one.
struct LoggingDriver {
    frames: u64,
}

impl FrameDriver for LoggingDriver {
    fn present(&mut self, frame: &FrameSnapshot) -> FrameSignal {
        self.frames += 1;
        log::trace!(
            "frame {}: half-range {:.6}, phase {:.4}, offset {}, {} points, {} labels",
            self.frames,
            frame.state.half_range,
            frame.state.phase,
            frame.state.offset,
            frame.points.len(),
            frame.labels.len(),
        );
        FrameSignal::Continue
    }
}

fn run(args: Args) -> Result<(), PlaneError> {
    let mut options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    options.plane.real_mode |= args.real_mode;
    let real_mode = options.plane.real_mode;

    let mut session = PlaneSession::new(options)?;
    for value in &args.values {
        let _ = session.place_value(*value);
    }

    let mut driver = LoggingDriver { frames: 0 };
    let _ = session.execute(args.command, &mut driver)?;
    log::info!("{} frames presented", driver.frames);

    if let Some(report) = session.last_report() {
        for value in &report.dropped {
            log::warn!("dropped {}", value.label(real_mode));
        }
    }
    let remaining: Vec<String> = session
        .scene()
        .points()
        .iter()
        .map(|(_, v)| v.label(real_mode))
        .collect();
    print_result(&remaining.join(", "));
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_result(text: &str) {
    println!("{text}");
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            log::error!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
