use anyhow::bail;
use clap::{Parser, Subcommand};
use method_explorer::{Chain, InputType, Registry, evaluate, guide_for, validate};

#[derive(Parser)]
#[command(name = "method-explorer")]
#[command(about = "Interactive method-chain explorer core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the operations selectable for an input type.
    Ops {
        #[arg(long = "type")]
        input_type: InputType,
    },

    /// Validate raw input against an input type.
    Validate {
        #[arg(long = "type")]
        input_type: InputType,

        #[arg(long)]
        input: String,

        /// Emit the full validation result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Build a chain by toggling operations in order, then evaluate it.
    Eval {
        #[arg(long = "type")]
        input_type: InputType,

        #[arg(long)]
        input: String,

        /// Operation id; repeat to chain. Repeating an already-selected id
        /// deselects it and everything after it, as in the interactive UI.
        #[arg(long = "op")]
        ops: Vec<String>,

        /// Emit the trace as JSON instead of the readable form.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> method_explorer::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let registry = Registry::new()?;

    match cli.cmd {
        Commands::Ops { input_type } => {
            let guide = guide_for(input_type);
            println!("Input format: {}", guide.example);
            println!("{}\n", guide.description);

            for category in &registry.operations_for(input_type)?.categories {
                println!("{}:", category.name);
                for op in &category.operations {
                    println!("  {} ({}) - {}", op.display_name, op.id, op.description);
                }
                println!();
            }
        }

        Commands::Validate { input_type, input, json } => {
            let result = validate(&input, input_type);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if result.is_valid {
                println!("valid {} input", input_type);
            } else {
                bail!(result.message.unwrap_or_else(|| "invalid input".to_string()));
            }
        }

        Commands::Eval { input_type, input, ops, json } => {
            // 1) Replay the toggles so truncation and nesting rules apply
            //    exactly as they do interactively.
            let mut chain = Chain::new();
            for id in &ops {
                chain = match chain.toggle(&registry, input_type, id) {
                    Ok(next) => {
                        log::debug!("chain after toggling {}: {:?}", id, next.ids());
                        next
                    }
                    Err(err) => bail!(err),
                };
            }

            // 2) Evaluate the whole chain from the initial value.
            let trace = match evaluate(&registry, input_type, &input, &chain) {
                Ok(trace) => trace,
                Err(err) => bail!(err),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&trace)?);
            } else {
                println!("{trace}");
            }
        }
    }

    Ok(())
}
