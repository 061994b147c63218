use anyhow::Result;
use log::LevelFilter;

use gridops_core::{convolve2d, SlidingWindows};
use gridops_demo::demos;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("GRIDOPS_LOG", "error,gridops=info,gridops_core=info"))
        .init();

    // --- Indexing: slicing, broadcasting, fancy indexing ---
    let a = demos::base_grid();
    println!("Original array A:\n{}", a);

    let sliced = demos::slice_demo(&a);
    println!("\nSliced A (first 3 rows, last 2 columns):\n{}", sliced);

    let row_vec = demos::row_vector();
    let broadcasted = demos::broadcast_demo(&a, &row_vec);
    println!("\nBroadcast A + {}:\n{}", row_vec, broadcasted);

    let fancy = demos::fancy_demo(&a);
    println!("\nFancy indexed A (rows [0, 2], then columns [1, 3]):\n{}", fancy);

    // --- Valid-mode 2D convolution ---
    let image = demos::sample_image();
    let kernel = demos::edge_kernel();
    log::debug!("convolving {:?} image with {:?} kernel", image.dim(), kernel.dim());
    let result = convolve2d(&image, &kernel)?;
    println!("\nConvolved result:\n{}", result);

    // --- Sliding-window view ---
    let xs = demos::sample_sequence();
    let windows = SlidingWindows::new(&xs, 3)?;
    println!("\nOriginal sequence:\n{:?}", xs);
    println!("Sliding windows:\n{}", windows.to_array());

    Ok(())
}
