use std::time::{Duration, Instant};

use burn::{
    nn::{
        loss::{MseLoss, Reduction},
        Linear, LinearConfig,
    },
    optim::{GradientsParams, Optimizer, SgdConfig},
    tensor::{backend::AutodiffBackend, Distribution, ElementConversion, Tensor},
};
use log::info;

#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub dim: usize,
    pub batch: usize,
    pub iters: usize,
    pub warmup: usize,
    pub lr: f64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            dim: 1000,
            batch: 1000,
            iters: 1000,
            warmup: 3,
            lr: 0.01,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BenchOutcome {
    pub elapsed: Duration,
    pub initial_loss: f32,
    pub final_loss: f32,
}

/// Runs a fixed regression training loop (linear layer, MSE loss, SGD) on the
/// given device and measures the wall-clock time of the timed iterations.
/// Warmup iterations run before the clock starts; the device is synchronized
/// on both sides of the measurement.
pub fn run_training_loop<B: AutodiffBackend>(
    config: &BenchConfig,
    device: &B::Device,
) -> BenchOutcome {
    let mut model: Linear<B> = LinearConfig::new(config.dim, config.dim).init(device);
    let data = Tensor::<B, 2>::random(
        [config.batch, config.dim],
        Distribution::Normal(0.0, 1.0),
        device,
    );
    let target = Tensor::<B, 2>::random(
        [config.batch, config.dim],
        Distribution::Normal(0.0, 1.0),
        device,
    );

    let loss_fn = MseLoss::new();
    let mut optim = SgdConfig::new().init::<B, Linear<B>>();

    let initial_loss: f32 = loss_fn
        .forward(model.forward(data.clone()), target.clone(), Reduction::Mean)
        .into_scalar()
        .elem();

    for _ in 0..config.warmup {
        model = train_step(model, &mut optim, &loss_fn, &data, &target, config.lr);
    }
    let _ = B::sync(device);

    let start = Instant::now();
    for _ in 0..config.iters {
        model = train_step(model, &mut optim, &loss_fn, &data, &target, config.lr);
    }
    let _ = B::sync(device);
    let elapsed = start.elapsed();

    let final_loss: f32 = loss_fn
        .forward(model.forward(data.clone()), target, Reduction::Mean)
        .into_scalar()
        .elem();
    info!(
        "loss {initial_loss:.4} -> {final_loss:.4} after {} timed steps",
        config.iters
    );

    BenchOutcome {
        elapsed,
        initial_loss,
        final_loss,
    }
}

fn train_step<B: AutodiffBackend, O: Optimizer<Linear<B>, B>>(
    model: Linear<B>,
    optim: &mut O,
    loss_fn: &MseLoss,
    data: &Tensor<B, 2>,
    target: &Tensor<B, 2>,
    lr: f64,
) -> Linear<B> {
    let output = model.forward(data.clone());
    let loss = loss_fn.forward(output, target.clone(), Reduction::Mean);
    let grads = GradientsParams::from_grads(loss.backward(), &model);
    optim.step(lr, model, grads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::{ndarray::NdArrayDevice, Autodiff, NdArray};

    type TestBackend = Autodiff<NdArray>;

    #[test]
    fn test_training_loop_reduces_loss() {
        let config = BenchConfig {
            dim: 8,
            batch: 16,
            iters: 50,
            warmup: 0,
            lr: 0.05,
        };
        let outcome = run_training_loop::<TestBackend>(&config, &NdArrayDevice::Cpu);
        assert!(
            outcome.final_loss < outcome.initial_loss,
            "loss did not decrease: {} -> {}",
            outcome.initial_loss,
            outcome.final_loss
        );
    }

    #[test]
    fn test_elapsed_time_is_measured() {
        let config = BenchConfig {
            dim: 4,
            batch: 4,
            iters: 5,
            warmup: 1,
            lr: 0.01,
        };
        let outcome = run_training_loop::<TestBackend>(&config, &NdArrayDevice::Cpu);
        assert!(outcome.elapsed > Duration::ZERO);
    }
}
