/// Example program to print the loaded configuration
///
/// Run with: cargo run -p wattway-config --example print_config

fn main() {
    let config = match wattway_config::WattwayConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    println!("=== Wattway Configuration ===\n");

    println!("Animation Settings:");
    println!("  Frame Rate: {}", config.animation.frame_rate);
    println!("  Max Frame (ms): {}", config.animation.max_frame_ms);
    println!("  Max Substep (ms): {}", config.animation.max_substep_ms);
    println!(
        "  Spring Position Epsilon: {}",
        config.animation.spring_position_epsilon
    );
    println!(
        "  Spring Velocity Epsilon: {}",
        config.animation.spring_velocity_epsilon
    );
    println!();

    println!("Theme Settings:");
    println!("  Path: {:?}", config.theme.path);
    println!();

    println!("Demo Settings:");
    println!("  Seconds: {}", config.demo.seconds);
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
