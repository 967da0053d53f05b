//! Command line front end for hand strength inference.
//!
//! Sequences are written as index lists, e.g. `"[3, 4, 2, 1]"` or `3,4,2,1`.

use anyhow::Context;
use clap::Parser;
use pokerhmm::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Query {
    #[command(
        about = "Rank every strategy by forward likelihood of an action stream",
        alias = "cls"
    )]
    Classify {
        #[arg(required = true)]
        actions: String,
        #[arg(long)]
        model: Option<std::path::PathBuf>,
    },
    #[command(
        about = "Decode the most probable hand strengths of each hand",
        alias = "vit"
    )]
    Decode {
        #[arg(required = true)]
        strategy: String,
        #[arg(required = true)]
        actions: String,
        #[arg(long)]
        model: Option<std::path::PathBuf>,
    },
    #[command(
        about = "Posterior over strategies given actions and known strengths",
        alias = "post"
    )]
    Posterior {
        #[arg(required = true)]
        actions: String,
        #[arg(required = true)]
        states: String,
        #[arg(long, help = "carry each hand's posterior into the next")]
        sequential: bool,
        #[arg(long)]
        model: Option<std::path::PathBuf>,
    },
    #[command(
        about = "Estimate transitions and initial law from preflop,flop,turn,river rows",
        alias = "est"
    )]
    Estimate {
        #[arg(required = true)]
        rows: Vec<String>,
        #[arg(long)]
        model: Option<std::path::PathBuf>,
    },
}

/// Reference parameters unless a JSON model file is given.
fn load(path: Option<&std::path::Path>) -> anyhow::Result<Model> {
    match path {
        None => Ok(Model::default()),
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("open model {}", path.display()))?;
            let model = serde_json::from_reader::<_, Model>(std::io::BufReader::new(file))
                .with_context(|| format!("parse model {}", path.display()))?;
            log::info!("{:<32}{:<32}", "loaded model", path.display());
            Ok(model)
        }
    }
}

fn main() -> anyhow::Result<()> {
    log()?;
    match Query::parse() {
        Query::Classify { actions, model } => {
            let model = load(model.as_deref())?;
            let actions = parse::<Action>(&actions)?;
            let likelihoods = Forward::from(&model).likelihoods(&actions)?;
            print!("{}", likelihoods);
            println!("classified as {}", likelihoods.argmax());
        }
        Query::Decode {
            strategy,
            actions,
            model,
        } => {
            let model = load(model.as_deref())?;
            let strategy = Strategy::try_from(strategy.as_str())?;
            let actions = parse::<Action>(&actions)?;
            for (i, path) in Viterbi::from(&model)
                .decode_hands(strategy, &actions)?
                .iter()
                .enumerate()
            {
                println!("hand {:>3}  {}", i + 1, path);
            }
        }
        Query::Posterior {
            actions,
            states,
            sequential,
            model,
        } => {
            let model = load(model.as_deref())?;
            let actions = parse::<Action>(&actions)?;
            let states = parse::<Strength>(&states)?;
            let estimator = Estimator::from(&model);
            let posterior = match sequential {
                false => estimator.posterior(&actions, &states, None)?,
                true => {
                    if actions.len() != states.len() {
                        anyhow::bail!(Error::InvalidObservation(format!(
                            "{} actions against {} hand strengths",
                            actions.len(),
                            states.len()
                        )));
                    }
                    let trail = estimator.sequential(hands(&actions).zip(hands(&states)), None)?;
                    for (i, belief) in trail.iter().enumerate() {
                        log::info!("{:<32}{:<32}", format!("hand {}", i + 1), format!("{:?}", belief.argmax()));
                    }
                    trail.last().copied().unwrap_or_default()
                }
            };
            print!("{}", posterior);
            match posterior.argmax() {
                Some(strategy) => println!("most probable {}", strategy),
                None => println!("no strategy explains these actions"),
            }
        }
        Query::Estimate { rows, model } => {
            let model = load(model.as_deref())?;
            let census = rows
                .iter()
                .map(|row| parse::<Strength>(row).and_then(|row| trajectory(&row)))
                .collect::<Result<Census, Error>>()?;
            let emissions = Strategy::all().map(|s| *model.emission(s));
            let estimated = census.model(emissions)?;
            print!("{}", census);
            println!("initial\n{}", estimated.initial());
        }
    }
    Ok(())
}
