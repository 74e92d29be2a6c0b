// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A horizontally scrolling grid with three rows per column.
//!
//! Shows how the pool is laid out lane by lane, how whole columns wrap as the
//! grid scrolls, and how changing the item count while scrolled keeps the
//! leading column in place.
//!
//! Run:
//! - `cargo run -p understory_recycler_demos --example grid_rebase`

use understory_recycler::{Orientation, RecycleConfig, Recycler};
use understory_recycler_demos::{SimHost, SimView, describe};

fn main() -> Result<(), understory_recycler::RecycleError> {
    let config = RecycleConfig::new(80, 60)
        .with_columns_or_rows(3)
        .with_orientation(Orientation::Horizontal);
    let host = SimHost::new(320.0, 180.0, Orientation::Horizontal);
    let mut recycler = Recycler::with_host(config, host)?;

    let pool = recycler.compute_required_pool_size()?;
    recycler.populate((0..pool).map(|_| SimView::default()))?;
    recycler.set_on_bind(|view, event| view.text = format!("tile {}", event.index));
    println!("{pool} views for a 320px wide viewport of 80px columns, 3 rows each");

    recycler.update_count(100, false)?;
    print!("{}", describe(&recycler));

    if let Some(host) = recycler.host_mut() {
        host.scroll_to(400.0);
    }
    let report = recycler.on_scroll();
    println!(
        "\nscrolled 5 columns: {} views wrapped, visible {:?}",
        report.wrapped,
        recycler.visible_indices()
    );

    // Appending data keeps the current columns on screen.
    recycler.update_count(300, false)?;
    println!(
        "\ngrew to 300 tiles, baseline {}, visible {:?}",
        recycler.baseline_index(),
        recycler.visible_indices()
    );

    // Debug layout: place the pool by display name.
    recycler.sort_alphabetically()?;
    println!("\nalphabetical placement from the same baseline:");
    print!("{}", describe(&recycler));
    Ok(())
}
