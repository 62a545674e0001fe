use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about = "Training-loop throughput benchmark", long_about = None)]
pub struct BenchArgs {
    /// Width of the square linear layer.
    #[arg(long, default_value_t = 1000)]
    pub dim: usize,

    #[arg(long, default_value_t = 1000)]
    pub batch: usize,

    #[arg(long, default_value_t = 1000)]
    pub iters: usize,

    #[arg(long, default_value_t = 3)]
    pub warmup: usize,

    #[arg(long, default_value_t = 0.01)]
    pub lr: f64,
}
