//! Algorithms command implementation.

use console::style;

use qgen_algo::Algorithm;

/// Execute the algorithms command.
pub fn execute() {
    println!("{} Available algorithms:\n", style("qgen").cyan().bold());

    for algorithm in Algorithm::ALL {
        println!(
            "  {} {:<8} {}",
            style("●").green(),
            style(algorithm.id()).bold(),
            algorithm.summary()
        );
        println!("    Default qubits: {}", algorithm.default_qubits());
    }
}
