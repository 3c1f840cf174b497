#![forbid(unsafe_code)]

use gotrix::cli::{Dispatcher, Registry};
use gotrix::paths::PathResolver;
use gotrix::process::SystemRunner;
use gotrix::toolchain::Toolchain;
use std::process::ExitCode;
use termcolor::{ColorChoice, StandardStream};

fn main() -> ExitCode {
    let runner = SystemRunner;
    let dispatcher = Dispatcher::new(
        Registry::builtin(Toolchain::default()),
        PathResolver::from_env(),
        &runner,
    );

    // Color is decided per line by the printer; the streams only honor it
    let mut stdout = StandardStream::stdout(ColorChoice::Always);
    let mut stderr = StandardStream::stderr(ColorChoice::Always);

    let code = dispatcher.run(std::env::args_os(), &mut stdout, &mut stderr);
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
