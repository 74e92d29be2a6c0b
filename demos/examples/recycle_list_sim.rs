// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A vertical list of 10,000 items served by seven views.
//!
//! This example walks a simulated scroll view through a recycling session:
//! - size the pool from the viewport and populate it,
//! - bind a large data set and scroll through it,
//! - change the count while scrolled, then reset,
//! - dispose.
//!
//! Run:
//! - `cargo run -p understory_recycler_demos --example recycle_list_sim`

use understory_recycler::{Orientation, RecycleConfig, Recycler};
use understory_recycler_demos::{SimHost, SimView, describe};

fn main() -> Result<(), understory_recycler::RecycleError> {
    let host = SimHost::new(300.0, 450.0, Orientation::Vertical);
    let mut recycler = Recycler::with_host(RecycleConfig::new(300, 100), host)?;

    let pool = recycler.compute_required_pool_size()?;
    recycler.populate((0..pool).map(|_| SimView::default()))?;
    recycler.set_on_bind(|view, event| {
        view.text = format!("row {}", event.index);
        view.binds += 1;
    });
    println!("pool of {pool} views for a 450px viewport");

    recycler.update_count(10_000, false)?;
    println!(
        "\n10,000 rows, content {}px tall:",
        recycler.host().map_or(0.0, SimHost::extent)
    );
    print!("{}", describe(&recycler));

    // Smooth scrolling: small steps, a few wraps per step.
    for step in 1..=7 {
        if let Some(host) = recycler.host_mut() {
            host.scroll_to(f64::from(step) * 50.0);
        }
        let report = recycler.on_scroll();
        println!(
            "scrolled to {:>4}px: {} wrapped, visible {:?}",
            step * 50,
            report.wrapped,
            recycler.visible_indices()
        );
    }

    // A fling far down the list moves each view by whole pool spans.
    if let Some(host) = recycler.host_mut() {
        host.scroll_to(512_340.0);
    }
    recycler.on_scroll();
    println!("\nafter a fling to 512340px:");
    print!("{}", describe(&recycler));

    // Shrinking below the current position pulls the pool back to the end.
    recycler.update_count(2_000, false)?;
    println!(
        "\nshrunk to 2,000 rows, scrolled {}px, baseline {}:",
        recycler.host().map_or(0.0, SimHost::scrolled),
        recycler.baseline_index()
    );
    print!("{}", describe(&recycler));

    recycler.update_count(50, true)?;
    println!("\nreset to 50 rows: visible {:?}", recycler.visible_indices());

    let binds: u32 = recycler.slots().iter().map(|s| s.handle().binds).sum();
    println!("{binds} binds in total across {pool} views");

    recycler.dispose();
    println!(
        "disposed, {} listener(s) left",
        recycler.host().map_or(0, SimHost::listeners)
    );
    Ok(())
}
