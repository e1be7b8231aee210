//! points-sample
//!
//! Builds a list of 2-D points node by node, exercises every chain operation
//! including the rejected ones, and prints the list after each step.
//!
//! ```bash
//! RUST_LOG=points_sample=info,glist=debug cargo run
//! ```

use glist::{Link, ListError, Status, chain};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy)]
struct Point {
    x: f64,
    y: f64,
}

fn print_point(point: &Point, position: usize) {
    if position == 0 {
        println!("all the list nodes:");
    }
    println!(" +- Point {position} (x, y):\t ({:.6}, {:.6})", point.x, point.y);
}

fn print_all(head: &Link<Point>) {
    if chain::for_each(head.as_deref(), print_point) == Status::EmptyList {
        tracing::info!("empty list");
    }
}

fn report(step: &str, result: Result<(), ListError>) {
    match result {
        Ok(()) => tracing::info!(step, "ok"),
        Err(error) => tracing::warn!(step, code = error.code(), "{error}"),
    }
}

fn main() -> Result<(), ListError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "points_sample=info,glist=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    report("append(null, null)", chain::append::<Point>(None, &mut None));
    match chain::destroy::<Point>(None) {
        Ok(status) => tracing::info!(step = "destroy(null)", %status),
        Err(error) => tracing::warn!(step = "destroy(null)", code = error.code(), "{error}"),
    }
    tracing::info!(nodes = chain::count::<Point>(None), "node num");

    let mut head: Link<Point> = Some(chain::create_node(Point { x: 10.0, y: 10.0 })?);
    let mut second = Some(chain::create_node(Point { x: 20.0, y: 20.0 })?);
    tracing::info!(nodes = chain::count(head.as_deref()), "node num");
    chain::append(head.as_deref_mut(), &mut second)?;
    tracing::info!(nodes = chain::count(head.as_deref()), "node num");
    print_all(&head);

    let mut third = Some(chain::create_node(Point { x: 30.0, y: 30.0 })?);
    report("insert_at(-1)", chain::insert_at(&mut head, -1, &mut third));
    chain::insert_at(&mut head, 1, &mut third)?;
    print_all(&head);

    if let Err(error) = chain::print_element(head.as_deref(), 5, print_point) {
        tracing::warn!(step = "print_element(5)", code = error.code(), "{error}");
    }

    let removed = chain::delete_at(&mut head, 1)?;
    tracing::info!(x = removed.x, y = removed.y, "removed");
    print_all(&head);

    tracing::info!(status = %chain::destroy(Some(&mut head))?, "destroy");
    print_all(&head);
    tracing::info!(status = %chain::destroy(Some(&mut head))?, "destroy again");

    Ok(())
}
