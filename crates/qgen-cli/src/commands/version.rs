//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quantum circuit generation and OpenQASM 2.0 emission",
        style("qgen").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qgen-ir    Gate and circuit intermediate representation");
    println!("  qgen-algo  Bell, Grover, Shor, VQE and QAOA generators");
    println!("  qgen-qasm  OpenQASM 2.0 emitter");
    println!("  qgen-cli   Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
