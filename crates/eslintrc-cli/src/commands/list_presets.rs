//! List presets command implementation.

use eslintrc_presets::Preset;

/// Runs the list-presets command.
pub fn run() {
    println!("Available presets:\n");
    println!("{:<10} Description", "Name");
    println!("{}", "-".repeat(60));

    for preset in Preset::ALL {
        println!("{:<10} {}", preset.name(), preset.description());
    }

    println!("\nEmit one into a project, e.g.:");
    println!("  eslintrc emit --preset react path/to/project");
}
