use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use rchess_history::history::{KNIGHT_MAGIC, KnightIndexDomain};
use rchess_history::types::Square;
use tools::knight_magic::{format_magic_table, search_magic, verify_embedded_table};

#[derive(Parser, Debug)]
#[command(author, version, about = "ナイト利き先集合の magic を探索・検証する")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// ランダム探索で magic を求める
    Search {
        /// 乱数シード
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// 対象マス（例: e4）。未指定なら全64マスを探索してテーブルを出力
        #[arg(long)]
        square: Vec<String>,

        /// 単射性を要求する部分集合の範囲
        #[arg(long, value_enum, default_value_t = DomainArg::NonEmpty)]
        domain: DomainArg,

        /// 1マスあたりの最大試行回数
        #[arg(long, default_value_t = 100_000_000)]
        max_tries: u64,
    },
    /// 埋め込みの KNIGHT_MAGIC を検査する
    Verify {
        #[arg(long, value_enum, default_value_t = DomainArg::NonEmpty)]
        domain: DomainArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DomainArg {
    /// 空集合を除く
    NonEmpty,
    /// 空集合を含む
    All,
}

impl From<DomainArg> for KnightIndexDomain {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::NonEmpty => KnightIndexDomain::NonEmpty,
            DomainArg::All => KnightIndexDomain::All,
        }
    }
}

fn parse_squares(names: &[String]) -> Result<Vec<Square>> {
    names
        .iter()
        .map(|s| Square::from_uci(s).with_context(|| format!("invalid square: {s}")))
        .collect()
}

fn run_search(
    seed: u64,
    squares: &[String],
    domain: KnightIndexDomain,
    max_tries: u64,
) -> Result<()> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    if !squares.is_empty() {
        for sq in parse_squares(squares)? {
            let found = search_magic(sq, domain, &mut rng, max_tries)
                .with_context(|| format!("{sq}: no magic within {max_tries} tries"))?;
            println!("{}\t{}\t{}", found.square, found.magic, found.tries);
        }
        return Ok(());
    }

    let mut magics = [0u64; Square::NUM];
    for sq in Square::all() {
        let found = search_magic(sq, domain, &mut rng, max_tries)
            .with_context(|| format!("{sq}: no magic within {max_tries} tries"))?;
        log::info!("{sq}: {} tries", found.tries);
        magics[sq.index()] = found.magic;
    }
    print!("{}", format_magic_table(&magics));
    Ok(())
}

fn run_verify(domain: KnightIndexDomain) -> Result<()> {
    let collisions = verify_embedded_table(domain);
    for c in &collisions {
        println!(
            "{}\t{:#x}\t{:#x}\tmagic={}",
            c.square,
            c.first.raw(),
            c.second.raw(),
            KNIGHT_MAGIC[c.square.index()]
        );
    }
    if !collisions.is_empty() {
        bail!("{} squares collide under {:?}", collisions.len(), domain);
    }
    log::info!("all {} squares are collision-free under {:?}", Square::NUM, domain);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Search {
            seed,
            square,
            domain,
            max_tries,
        } => run_search(seed, &square, domain.into(), max_tries),
        Command::Verify { domain } => run_verify(domain.into()),
    }
}
