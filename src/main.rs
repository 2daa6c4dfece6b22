//! Demo driver: builds a tree from random keys, pushes it off balance and rebuilds it, printing
//! the traversals along the way.

use balanced_bst::Tree;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

#[derive(Parser, Debug)]
#[command(author, version, about = "Build, unbalance, and rebalance a binary search tree")]
struct Cli {
    /// Upper bound (exclusive) on how many random keys to draw
    #[arg(long, env = "BST_MAX_LEN", default_value_t = 100)]
    max_len: usize,

    /// Upper bound (exclusive) on each random key
    #[arg(long, env = "BST_MAX_KEY", default_value_t = 100, value_parser = clap::value_parser!(i32).range(1..))]
    max_key: i32,

    /// Seed for reproducible runs
    #[arg(long, env = "BST_SEED")]
    seed: Option<u64>,

    /// Keys inserted after the initial build to push the tree off balance
    #[arg(long, value_delimiter = ',', default_value = "111,222,333")]
    extra: Vec<i32>,

    /// Verbosity: -d info, -dd debug, -ddd trace
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);
    debug!(?cli, "parsed arguments");

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let keys = random_keys(&mut rng, cli.max_len, cli.max_key);
    info!(drawn = keys.len(), "building tree");

    let mut tree = Tree::build(keys);
    println!("balanced: {}", tree.is_balanced());
    print_traversals(&tree, true);

    for &key in &cli.extra {
        if !tree.insert(key) {
            info!(key, "already present");
        }
    }
    println!("balanced after inserting {:?}: {}", cli.extra, tree.is_balanced());

    tree.rebalance();
    println!("balanced after rebalance: {}", tree.is_balanced());
    print_traversals(&tree, false);

    print!("{}", tree);
}

/// Draws fewer than `max_len` keys, each in `0..max_key`.
fn random_keys(rng: &mut impl Rng, max_len: usize, max_key: i32) -> Vec<i32> {
    let len = if max_len == 0 { 0 } else { rng.random_range(0..max_len) };
    (0..len).map(|_| rng.random_range(0..max_key)).collect()
}

fn print_traversals(tree: &Tree<i32>, with_level_order: bool) {
    if with_level_order {
        println!("level order: {:?}", tree.level_order());
    }
    println!("pre-order:   {:?}", tree.pre_order());
    println!("post-order:  {:?}", tree.post_order());
    println!("in-order:    {:?}", tree.in_order());
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
