// ⚡ Power Bill - slab tariffs, fixed charge, GST + surcharge
//
// A tariff is three slabs with cumulative upper limits. Consumption fills the
// slabs in order; each slab bills min(remaining, width) at its own rate.

use crate::error::{LabError, LabResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub const GST_RATE: f64 = 0.05;
pub const SURCHARGE_RATE: f64 = 0.02;

// ============================================================================
// CUSTOMER CLASS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerClass {
    Residential,
    Commercial,
    Industrial,
}

impl CustomerClass {
    pub const ALL: [CustomerClass; 3] = [
        CustomerClass::Residential,
        CustomerClass::Commercial,
        CustomerClass::Industrial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerClass::Residential => "residential",
            CustomerClass::Commercial => "commercial",
            CustomerClass::Industrial => "industrial",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CustomerClass::Residential => "Residential",
            CustomerClass::Commercial => "Commercial",
            CustomerClass::Industrial => "Industrial",
        }
    }

    /// Fixed rate table for this class
    pub fn tariff(&self) -> Tariff {
        match self {
            CustomerClass::Residential => Tariff {
                fixed_charge: 50.0,
                slabs: [
                    Slab::new("slab1", Some(100.0), 3.50),
                    Slab::new("slab2", Some(200.0), 4.50),
                    Slab::new("slab3", None, 5.50),
                ],
            },
            CustomerClass::Commercial => Tariff {
                fixed_charge: 100.0,
                slabs: [
                    Slab::new("slab1", Some(200.0), 5.00),
                    Slab::new("slab2", Some(500.0), 6.50),
                    Slab::new("slab3", None, 7.50),
                ],
            },
            CustomerClass::Industrial => Tariff {
                fixed_charge: 200.0,
                slabs: [
                    Slab::new("slab1", Some(500.0), 6.00),
                    Slab::new("slab2", Some(1000.0), 7.50),
                    Slab::new("slab3", None, 8.50),
                ],
            },
        }
    }
}

impl FromStr for CustomerClass {
    type Err = LabError;

    /// Accepts class names (any case) and the menu digits 1/2/3
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "residential" => Ok(CustomerClass::Residential),
            "2" | "commercial" => Ok(CustomerClass::Commercial),
            "3" | "industrial" => Ok(CustomerClass::Industrial),
            _ => Err(LabError::InvalidValue(
                "Invalid customer type. Use 'residential', 'commercial', or 'industrial'".to_string(),
            )),
        }
    }
}

impl fmt::Display for CustomerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TARIFF
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Slab {
    pub name: &'static str,

    /// Cumulative upper limit in units; `None` is unbounded
    pub upper_limit: Option<f64>,

    /// Price per unit
    pub rate: f64,
}

impl Slab {
    const fn new(name: &'static str, upper_limit: Option<f64>, rate: f64) -> Self {
        Slab { name, upper_limit, rate }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tariff {
    pub fixed_charge: f64,
    pub slabs: [Slab; 3],
}

// ============================================================================
// BILL
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlabCharge {
    pub slab: String,
    pub units: f64,
    pub rate: f64,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bill {
    pub customer_type: CustomerClass,
    pub units_consumed: f64,
    pub fixed_charge: f64,
    pub slab_details: Vec<SlabCharge>,
    pub subtotal: f64,
    pub gst: f64,
    pub surcharge: f64,
    pub total_amount: f64,
}

impl Bill {
    /// Units billed across all slabs (equals `units_consumed`)
    pub fn billed_units(&self) -> f64 {
        self.slab_details.iter().map(|s| s.units).sum()
    }

    pub fn slab(&self, name: &str) -> Option<&SlabCharge> {
        self.slab_details.iter().find(|s| s.slab == name)
    }
}

/// Compute a bill for `units_consumed` under the class's tariff.
pub fn calculate_power_bill(units_consumed: f64, customer_type: CustomerClass) -> LabResult<Bill> {
    if !units_consumed.is_finite() {
        return Err(LabError::InvalidValue("Units consumed must be a finite number".to_string()));
    }
    if units_consumed < 0.0 {
        return Err(LabError::InvalidValue("Units consumed cannot be negative".to_string()));
    }

    let tariff = customer_type.tariff();
    let mut subtotal = tariff.fixed_charge;
    let mut remaining = units_consumed;
    let mut lower_limit = 0.0;
    let mut slab_details = Vec::new();

    for slab in &tariff.slabs {
        if remaining <= 0.0 {
            break;
        }

        let units = match slab.upper_limit {
            Some(limit) => remaining.min(limit - lower_limit),
            None => remaining,
        };

        if units > 0.0 {
            let amount = units * slab.rate;
            subtotal += amount;
            slab_details.push(SlabCharge {
                slab: slab.name.to_string(),
                units,
                rate: slab.rate,
                amount,
            });
            remaining -= units;
        }

        if let Some(limit) = slab.upper_limit {
            lower_limit = limit;
        }
    }

    let gst = subtotal * GST_RATE;
    let surcharge = subtotal * SURCHARGE_RATE;
    let total_amount = subtotal + gst + surcharge;

    debug!(
        customer_type = customer_type.as_str(),
        units_consumed,
        slabs = slab_details.len(),
        total_amount,
        "calculated power bill"
    );

    Ok(Bill {
        customer_type,
        units_consumed,
        fixed_charge: tariff.fixed_charge,
        slab_details,
        subtotal,
        gst,
        surcharge,
        total_amount,
    })
}

/// Example bills printed before the interactive part of the bill session
pub fn demo_bills() -> Vec<(&'static str, f64, CustomerClass)> {
    vec![
        ("Residential Customer (150 units)", 150.0, CustomerClass::Residential),
        ("Commercial Customer (300 units)", 300.0, CustomerClass::Commercial),
        ("Industrial Customer (800 units)", 800.0, CustomerClass::Industrial),
    ]
}

// ============================================================================
// RENDERING
// ============================================================================

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(50);
        let light = "-".repeat(50);

        writeln!(f, "{}", heavy)?;
        writeln!(f, "                    POWER BILL")?;
        writeln!(f, "{}", heavy)?;
        writeln!(f, "Customer Type:     {}", self.customer_type.title())?;
        writeln!(f, "Units Consumed:    {:.2} units", self.units_consumed)?;
        writeln!(f, "{}", light)?;
        writeln!(f, "SLAB WISE BREAKDOWN:")?;
        writeln!(f, "{}", light)?;
        for slab in &self.slab_details {
            writeln!(
                f,
                "{}: {:.2} units × ₹{:.2} = ₹{:.2}",
                slab.slab.to_uppercase(),
                slab.units,
                slab.rate,
                slab.amount
            )?;
        }
        writeln!(f, "{}", light)?;
        writeln!(f, "Fixed Charge:      ₹{:.2}", self.fixed_charge)?;
        writeln!(f, "Subtotal:          ₹{:.2}", self.subtotal)?;
        writeln!(f, "GST (5%):          ₹{:.2}", self.gst)?;
        writeln!(f, "Surcharge (2%):    ₹{:.2}", self.surcharge)?;
        writeln!(f, "{}", heavy)?;
        writeln!(f, "TOTAL AMOUNT:      ₹{:.2}", self.total_amount)?;
        write!(f, "{}", heavy)
    }
}
