use std::time::Instant;

use tracing::info;

use crate::simulation::error::Result;
use crate::simulation::rope::Rope;
use crate::simulation::states::NVec2;

/// Build a horizontal rope of `n` nodes pinned at the left end
fn make_rope(n: usize) -> Result<Rope> {
    Rope::new(NVec2::new(0.0, 0.0), NVec2::new(n as f64 * 0.1, 0.0), n, 1.0, 100.0, &[0])
}

/// Time Euler and Verlet ticks for ropes of each size in `ns`
/// Returns `(n, euler_ms, verlet_ms)` per size, averaged over `steps` ticks
pub fn bench_step(ns: &[usize], steps: usize) -> Result<Vec<(usize, f64, f64)>> {
    let dt = 0.001;
    let gravity = NVec2::new(0.0, -9.8);
    let steps = steps.max(1);
    let mut rows = Vec::with_capacity(ns.len());

    info!("N,euler_ms,verlet_ms");

    for &n in ns {
        // Euler
        let mut rope = make_rope(n)?;
        // Warm up
        rope.simulate_euler(dt, gravity)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            rope.simulate_euler(dt, gravity)?;
        }
        let ms_euler = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        // Verlet
        let mut rope = make_rope(n)?;
        rope.simulate_verlet(dt, gravity)?;

        let t1 = Instant::now();
        for _ in 0..steps {
            rope.simulate_verlet(dt, gravity)?;
        }
        let ms_verlet = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        info!("{},{:.6},{:.6}", n, ms_euler, ms_verlet);
        rows.push((n, ms_euler, ms_verlet));
    }

    Ok(rows)
}
