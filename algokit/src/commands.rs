use std::time::{Duration, Instant};

use anyhow::Result;
use rand::Rng;

use crate::cli::Command;
use crate::registry::{SearchRegistry, SortRegistry};
use crate::sequence::DoublyLinkedList;

pub fn execute_command(cmd: Command) -> Result<()> {
    match cmd {
        Command::Sort {
            algorithm,
            linked,
            trace,
            json,
            values,
        } => {
            let registry = SortRegistry::with_defaults();
            let algo = registry.get(&algorithm)?;
            if linked {
                let list = DoublyLinkedList::from(values);
                if trace {
                    let frames: Vec<Vec<i64>> =
                        algo.sort_linked_traced(&list).map(|l| l.to_vec()).collect();
                    print_frames(&frames, json)?;
                } else {
                    println!("{:?}", algo.sort_linked(&list).to_vec());
                }
            } else if trace {
                let frames: Vec<Vec<i64>> = algo
                    .sort_traced(&values)
                    .map(|step| step.into_values())
                    .collect();
                print_frames(&frames, json)?;
            } else {
                println!("{:?}", algo.sort(&values));
            }
        }
        Command::Search {
            algorithm,
            target,
            values,
        } => {
            let registry = SearchRegistry::with_defaults();
            let search = registry.get(&algorithm)?;
            let outcome = search(&values, &target);
            match outcome.index {
                Some(index) => println!(
                    "found at index {index} after {} iteration(s)",
                    outcome.iterations
                ),
                None => println!("not found after {} iteration(s)", outcome.iterations),
            }
        }
        Command::List => {
            let sorts = SortRegistry::with_defaults();
            let searches = SearchRegistry::with_defaults();
            println!("sort algorithms:   {}", sorts.names().join(", "));
            println!("search algorithms: {}", searches.names().join(", "));
        }
        Command::Compare { size, rounds } => {
            compare(size, rounds.max(1));
        }
    }
    Ok(())
}

fn print_frames(frames: &[Vec<i64>], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(frames)?);
    } else {
        for (i, frame) in frames.iter().enumerate() {
            println!("step {i:3}: {frame:?}");
        }
    }
    Ok(())
}

fn compare(size: usize, rounds: usize) {
    let mut rng = rand::thread_rng();
    let data: Vec<i64> = (0..size)
        .map(|_| rng.gen_range(-1_000_000..1_000_000))
        .collect();
    let registry = SortRegistry::with_defaults();
    println!("{size} elements, best of {rounds} round(s)");
    for name in registry.names() {
        let algo = registry.get(name).expect("default algorithm");
        let mut best: Option<Duration> = None;
        for _ in 0..rounds {
            let start = Instant::now();
            let sorted = algo.sort(&data);
            let elapsed = start.elapsed();
            assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
            best = Some(best.map_or(elapsed, |b| b.min(elapsed)));
        }
        println!("{name:<12} {:>12.3?}", best.expect("at least one round"));
    }
}
