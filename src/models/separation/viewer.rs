//! Host-facing session types.
//!
//! A viewer owns rendering, widgets, and its own schedule. It talks to the
//! models through two small types:
//!
//! - [`EquipmentView`] holds the descriptor of the equipment on screen and
//!   fans out "show details" requests to handlers the host registers.
//! - [`SimulationState`] holds the latest operating inputs and the estimate
//!   computed from them. The host updates it on every interaction event; the
//!   models never poll it.

use std::fmt;

use twine_core::Model;
use uom::si::f64::{Pressure, Velocity};

use super::{DisplayField, EquipmentDescriptor, OperatingInputs, SeparationEfficiency, ValidationError};

type DetailsHandler = Box<dyn FnMut(&[DisplayField])>;

/// The equipment currently shown by the host, plus its details handlers.
///
/// # Example
///
/// ```
/// # use plant3d_models::models::separation::{Dimensions, EquipmentDescriptor, Ratings};
/// # use plant3d_models::models::separation::viewer::EquipmentView;
/// # use uom::si::{f64::*, pressure::bar, ratio::percent, thermodynamic_temperature::degree_celsius,
/// #     velocity::meter_per_second};
/// # let descriptor = EquipmentDescriptor::create(
/// #     "32-C-2222", "Flash Gas Cyclone", "", "",
/// #     Dimensions::from_millimeters(279.0, 1117.0, 12.7),
/// #     Ratings {
/// #         design_pressure: Pressure::new::<bar>(24.0),
/// #         design_temperature: ThermodynamicTemperature::new::<degree_celsius>(140.0),
/// #         efficiency: Ratio::new::<percent>(99.2),
/// #         pressure_drop: Pressure::new::<bar>(0.35),
/// #         inlet_velocity: Velocity::new::<meter_per_second>(20.0),
/// #     },
/// #     "CS",
/// # ).unwrap();
/// use std::{cell::RefCell, rc::Rc};
///
/// let mut view = EquipmentView::init(descriptor);
///
/// let shown = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&shown);
/// view.on_details_requested(move |fields| sink.borrow_mut().extend_from_slice(fields));
///
/// // e.g. from the host's click handler
/// assert_eq!(view.request_details(), 1);
/// assert_eq!(shown.borrow()[0].value, "32-C-2222");
/// ```
pub struct EquipmentView {
    descriptor: EquipmentDescriptor,
    handlers: Vec<DetailsHandler>,
}

impl EquipmentView {
    /// Initializes a view for the given equipment with no handlers.
    #[must_use]
    pub fn init(descriptor: EquipmentDescriptor) -> Self {
        Self {
            descriptor,
            handlers: Vec::new(),
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> &EquipmentDescriptor {
        &self.descriptor
    }

    /// Swaps in an updated descriptor and returns the previous one.
    ///
    /// Registered handlers are kept.
    pub fn replace_descriptor(&mut self, descriptor: EquipmentDescriptor) -> EquipmentDescriptor {
        std::mem::replace(&mut self.descriptor, descriptor)
    }

    /// Registers a handler invoked whenever details are requested.
    pub fn on_details_requested(&mut self, handler: impl FnMut(&[DisplayField]) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Materializes the display fields and passes them to every handler,
    /// in registration order.
    ///
    /// Returns the number of handlers notified.
    pub fn request_details(&mut self) -> usize {
        let fields = self.descriptor.to_display_fields();
        for handler in &mut self.handlers {
            handler(&fields);
        }
        self.handlers.len()
    }
}

impl fmt::Debug for EquipmentView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EquipmentView")
            .field("descriptor", &self.descriptor)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// Host-owned record of the current operating inputs and estimate.
///
/// Starts at zero inputs with no estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationState {
    pub inlet_velocity: Velocity,
    pub applied_pressure_drop: Pressure,
    pub estimated_efficiency: Option<SeparationEfficiency>,
}

impl SimulationState {
    /// Applies new inputs and recomputes the estimate.
    ///
    /// The most recent valid input wins. On error the state is left as it
    /// was, so the host can keep showing the last good estimate.
    ///
    /// # Errors
    ///
    /// Returns the estimator's [`ValidationError`] if the inputs are invalid.
    pub fn apply<M>(
        &mut self,
        estimator: &M,
        inputs: OperatingInputs,
    ) -> Result<SeparationEfficiency, ValidationError>
    where
        M: Model<Input = OperatingInputs, Output = SeparationEfficiency, Error = ValidationError>,
    {
        let efficiency = estimator.call(&inputs)?;

        self.inlet_velocity = inputs.inlet_velocity;
        self.applied_pressure_drop = inputs.pressure_drop_signal;
        self.estimated_efficiency = Some(efficiency);

        Ok(efficiency)
    }

    /// Returns the inputs last applied.
    #[must_use]
    pub fn inputs(&self) -> OperatingInputs {
        OperatingInputs::new(self.inlet_velocity, self.applied_pressure_drop)
    }
}
