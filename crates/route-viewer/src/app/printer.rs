//! Text rendering of the instruction list

use crate::app::format::{MeasurementSystem, pretty_distance, pretty_time};
use route_model_lib::{RouteModel, RouteObserver, TurnInstruction};
use std::cell::RefCell;
use std::io::{self, Write};

/// Observer that writes the route summary and instruction rows to `W`
pub struct InstructionListPrinter<W: Write> {
    output: RefCell<W>,
    units: MeasurementSystem,
}

impl<W: Write> InstructionListPrinter<W> {
    pub fn new(output: W, units: MeasurementSystem) -> Self {
        Self {
            output: RefCell::new(output),
            units,
        }
    }

    /// Run `f` against the underlying writer
    pub fn with_output<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        let output = self.output.borrow();
        f(&*output)
    }

    /// One row: icon, wording and, when positive, the distance to the next turn
    fn row(&self, instruction: &TurnInstruction) -> String {
        let mut row = format!("  [{}] {}", instruction.icon_id(), instruction.instruction());
        if instruction.distance() > 0.0 {
            row.push_str(&format!(
                " ({})",
                pretty_distance(instruction.distance(), self.units)
            ));
        }
        row
    }

    fn write_route(&self, route: &RouteModel) -> io::Result<()> {
        let mut out = self.output.borrow_mut();
        writeln!(
            out,
            "Route: {}, {}",
            pretty_distance(route.distance(), self.units),
            pretty_time(route.time())
        )?;

        let bbox = route.bounding_box();
        if let (Some(min_lat), Some(min_lon), Some(max_lat), Some(max_lon)) = (
            bbox.min_latitude(),
            bbox.min_longitude(),
            bbox.max_latitude(),
            bbox.max_longitude(),
        ) {
            writeln!(
                out,
                "Bounds: {min_lat:.5},{min_lon:.5} to {max_lat:.5},{max_lon:.5}"
            )?;
        }

        for instruction in route.instructions() {
            writeln!(out, "{}", self.row(instruction))?;
        }
        out.flush()
    }

    fn write_error(&self, message: &str) -> io::Result<()> {
        let mut out = self.output.borrow_mut();
        writeln!(out, "Error: {message}")?;
        out.flush()
    }
}

impl<W: Write> RouteObserver for InstructionListPrinter<W> {
    fn on_update(&self, route: &RouteModel) {
        if let Err(err) = self.write_route(route) {
            tracing::error!("Failed to print route: {err}");
        }
    }

    fn on_reset(&self, _route: &RouteModel) {
        tracing::info!("Route cleared");
    }

    fn on_error(&self, _route: &RouteModel, message: &str) {
        if let Err(err) = self.write_error(message) {
            tracing::error!("Failed to print route error: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use route_model_lib::{Coordinate, RouteUpdate, TurnInstructionInput, TurnInstructionKind};
    use std::rc::Rc;

    fn output(printer: &InstructionListPrinter<Vec<u8>>) -> String {
        printer.with_output(|bytes| String::from_utf8(bytes.clone()).unwrap())
    }

    fn instruction(kind: TurnInstructionKind, distance: f64, text: &str) -> TurnInstruction {
        TurnInstruction::new(TurnInstructionInput {
            coordinate: Coordinate::new(0.0, 0.0),
            kind,
            distance,
            instruction: text.to_string(),
            turn_angle: None,
        })
    }

    #[test]
    fn test_prints_route() {
        let mut route = RouteModel::new();
        let printer = Rc::new(InstructionListPrinter::new(
            Vec::new(),
            MeasurementSystem::Metric,
        ));
        route.register(printer.clone());

        route.update(RouteUpdate {
            path: vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)],
            instructions: vec![
                instruction(TurnInstructionKind::Start, 0.0, "Start!"),
                instruction(TurnInstructionKind::Left, 150.0, "Turn left"),
                instruction(TurnInstructionKind::End, 0.0, "Arrive"),
            ],
            distance: 1500.0,
            time: 120.0,
            bounding_box: None,
        });

        let text = output(&printer);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Route: 1.5 km, 2 min",
                "Bounds: 0.00000,0.00000 to 1.00000,1.00000",
                "  [maps-point-start-symbolic] Start!",
                "  [maps-direction-left-symbolic] Turn left (150 m)",
                "  [maps-point-end-symbolic] Arrive",
            ]
        );
    }

    #[test]
    fn test_prints_error() {
        let route = RouteModel::new();
        let printer = Rc::new(InstructionListPrinter::new(
            Vec::new(),
            MeasurementSystem::Imperial,
        ));
        route.register(printer.clone());

        route.error("No route found");
        assert_eq!(output(&printer), "Error: No route found\n");
    }

    #[test]
    fn test_empty_route_has_no_bounds_line() {
        let mut route = RouteModel::new();
        let printer = Rc::new(InstructionListPrinter::new(
            Vec::new(),
            MeasurementSystem::Metric,
        ));
        route.register(printer.clone());

        route.update(RouteUpdate::default());
        assert_eq!(output(&printer), "Route: 0 m, 0 s\n");
    }
}
