//! Renderers for computed payslips.
//!
//! Every renderer is a pure function of the payslips it is given: nothing
//! is recomputed here, amounts are printed exactly as the engine produced
//! them. CSV returns use CRLF line endings and two-decimal amounts.

mod payslip;
mod returns;

pub use payslip::render_payslip;
pub use returns::{
    BANK_FILE_HEADER, HEALTH_RETURN_HEADER, PENSION_RETURN_HEADER, TAX_RETURN_HEADER,
    bank_transfer_csv, health_return_csv, pension_return_csv, tax_return_csv,
};
