use burn::backend::{ndarray::NdArrayDevice, Autodiff, NdArray};
use clap::Parser;
use quotelab::bench::{run_training_loop, BenchConfig, BenchOutcome};
use quotelab::cli::BenchArgs;

type CpuBackend = Autodiff<NdArray>;

fn main() {
    env_logger::init();

    let args = BenchArgs::parse();
    let config = BenchConfig {
        dim: args.dim,
        batch: args.batch,
        iters: args.iters,
        warmup: args.warmup,
        lr: args.lr,
    };

    println!("Testing elapsed time...");

    let outcome = run_training_loop::<CpuBackend>(&config, &NdArrayDevice::Cpu);
    report("cpu", &outcome);

    #[cfg(feature = "wgpu")]
    {
        use burn::backend::{wgpu::WgpuDevice, Wgpu};

        type GpuBackend = Autodiff<Wgpu>;

        let outcome = run_training_loop::<GpuBackend>(&config, &WgpuDevice::default());
        report("wgpu", &outcome);
    }

    #[cfg(not(feature = "wgpu"))]
    println!("wgpu backend not available in this build; rerun with --features wgpu");
}

fn report(device_name: &str, outcome: &BenchOutcome) {
    println!(
        "{device_name} elapsed time: {:.2} seconds",
        outcome.elapsed.as_secs_f64()
    );
}
