#[allow(unused_imports)]
#[macro_use]
extern crate log;

use anyhow::Result;

use twinbox::prelude::*;
use twinbox::{clone, clone_handle, try_clone_as};

fn main() -> Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    // a little prototype registry: one pre-built instance per variant,
    // stamped out on demand without anyone knowing the concrete types
    let prototypes: Vec<Box<dyn Figure>> = vec![
        Box::new(Square { side: 4.0 }),
        Box::new(Circle { radius: 2.0 }),
    ];

    for proto in &prototypes {
        let stamped = clone_handle(proto);
        // deref matters: calling type_name on the Box itself would name
        // the Box, not the figure inside
        info!(
            "stamped a {} with area {}",
            (*stamped).type_name(),
            stamped.area(),
        );
    }

    // whole-registry copy, through the generated Clone for Box<dyn Figure>
    let backup = prototypes.clone();
    info!("registry backup holds {} prototypes", backup.len());

    // concrete handles come back concretely typed
    let square = Square { side: 3.0 };
    let twin: Box<Square> = clone(&square);
    info!("squares stay squares: {:?}", twin);

    // and a root handle can be asked for its member explicitly
    let first: &dyn Figure = &*prototypes[0];
    match try_clone_as::<Circle, _>(first) {
        Ok(circle) => info!("somehow stamped a circle: {:?}", circle),
        Err(err) => warn!("{}", err),
    }

    Ok(())
}

pub trait Figure: Cloneable {
    fn area(&self) -> f64;
}
twinbox::family!(Figure);

#[derive(Debug, Clone)]
pub struct Square {
    pub side: f64,
}

impl Figure for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

#[derive(Debug, Clone)]
pub struct Circle {
    pub radius: f64,
}

impl Figure for Circle {
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

twinbox::members!(Figure: Square, Circle);
