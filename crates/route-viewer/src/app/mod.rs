//! Route session
//!
//! A session owns one [`RouteModel`] for the lifetime of a route preview,
//! feeds it from route documents and keeps an instruction list printer
//! registered on it.

pub mod document;
pub mod format;
pub mod printer;
pub mod settings;

use crate::Result;
use document::RouteDocument;
use format::MeasurementSystem;
use printer::InstructionListPrinter;
use route_model_lib::{AssemblerConfig, InstructionAssembler, RouteModel};
use settings::Settings;
use std::io::Write;
use std::rc::Rc;

/// One route preview: the model plus the printer observing it
pub struct RouteSession<W: Write + 'static> {
    route: RouteModel,
    assembler: InstructionAssembler,
    printer: Rc<InstructionListPrinter<W>>,
}

impl<W: Write + 'static> RouteSession<W> {
    pub fn new(config: AssemblerConfig, units: MeasurementSystem, output: W) -> Self {
        let route = RouteModel::new();
        let printer = Rc::new(InstructionListPrinter::new(output, units));
        route.register(printer.clone());
        Self {
            route,
            assembler: InstructionAssembler::new(config),
            printer,
        }
    }

    /// Push a document into the model
    ///
    /// Failure documents and documents that cannot be resolved are reported
    /// through the model's error notification; the latter also return `Err`.
    pub fn show(&mut self, document: RouteDocument) -> Result<()> {
        if let Some(message) = &document.error {
            self.route.error(message);
            return Ok(());
        }

        let update = document
            .validate()
            .and_then(|()| document.into_update(&self.assembler));
        match update {
            Ok(update) => {
                self.route.update(update);
                Ok(())
            }
            Err(err) => {
                self.route.error(&err.to_string());
                Err(err)
            }
        }
    }

    /// End the preview, clearing the model
    pub fn close(&mut self) {
        self.route.reset();
    }

    #[inline]
    pub fn route(&self) -> &RouteModel {
        &self.route
    }

    #[inline]
    pub fn printer(&self) -> &InstructionListPrinter<W> {
        &self.printer
    }
}

/// Load the configured route file, print it and close the session
pub fn run(settings: &Settings) -> Result<()> {
    let document = RouteDocument::load(&settings.route_file)?;
    let mut session = RouteSession::new(
        settings.assembler_config(),
        settings.units,
        std::io::stdout(),
    );

    let result = session.show(document);
    session.close();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ViewerError;
    use route_model_lib::{Coordinate, RawTurnEvent, RouteState};

    fn session() -> RouteSession<Vec<u8>> {
        RouteSession::new(
            AssemblerConfig::default(),
            MeasurementSystem::Metric,
            Vec::new(),
        )
    }

    fn output(session: &RouteSession<Vec<u8>>) -> String {
        session
            .printer()
            .with_output(|bytes| String::from_utf8(bytes.clone()).unwrap())
    }

    fn document() -> RouteDocument {
        RouteDocument {
            path: vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(0.0, 1.0),
                Coordinate::new(1.0, 1.0),
            ],
            instructions: vec![
                RawTurnEvent {
                    sign: -2,
                    distance: 150.0,
                    text: "Turn left".to_string(),
                    street_name: None,
                    interval: (1, 2),
                    turn_angle: None,
                },
                RawTurnEvent {
                    sign: 4,
                    distance: 0.0,
                    text: "Arrive".to_string(),
                    street_name: None,
                    interval: (2, 2),
                    turn_angle: None,
                },
            ],
            distance: 300.0,
            time: 120.0,
            bbox: None,
            error: None,
        }
    }

    #[test]
    fn test_show_route() {
        let mut session = session();
        session.show(document()).unwrap();

        assert_eq!(session.route().state(), RouteState::Populated);
        assert_eq!(session.route().instructions().len(), 3);
        assert!(output(&session).contains("[maps-direction-left-symbolic] Turn left (150 m)"));
    }

    #[test]
    fn test_show_error_keeps_previous_route() {
        let mut session = session();
        session.show(document()).unwrap();
        session
            .show(RouteDocument {
                error: Some("No route found".to_string()),
                ..RouteDocument::default()
            })
            .unwrap();

        assert_eq!(session.route().instructions().len(), 3);
        assert!(output(&session).ends_with("Error: No route found\n"));
    }

    #[test]
    fn test_unresolvable_document_is_reported() {
        let mut session = session();
        let mut broken = document();
        broken.instructions[0].interval = (99, 100);

        let result = session.show(broken);
        assert!(matches!(result, Err(ViewerError::Route(_))));
        assert!(session.route().is_empty());
        assert!(output(&session).starts_with("Error: Route error: Instruction 0 references path index 99"));
    }

    #[test]
    fn test_close_resets() {
        let mut session = session();
        session.show(document()).unwrap();
        session.close();
        assert!(session.route().is_empty());
        assert!(session.route().bounding_box().is_empty());
    }
}
