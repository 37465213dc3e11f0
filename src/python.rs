use pyo3::exceptions::{PyLookupError, PyValueError};
use pyo3::prelude::*;

use crate::error::NrrError;
use crate::overs::{decimal_to_overs, overs_to_decimal};
use crate::reachability::{can_reach_position, reachable_positions};
use crate::request::ScenarioRequest;
use crate::scenario::calculate_scenario;
use crate::standings::PointsTable;

fn to_py_err(err: NrrError) -> PyErr {
    match err {
        NrrError::TeamNotFound(_) | NrrError::PositionNotFound(_) => {
            PyLookupError::new_err(err.to_string())
        }
        other => PyValueError::new_err(other.to_string()),
    }
}

fn load_table(standings_json: Option<&str>) -> PyResult<PointsTable> {
    match standings_json {
        Some(json) => PointsTable::from_json_str(json).map_err(to_py_err),
        None => Ok(PointsTable::ipl_sample()),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Convert cricket notation ("19.4") to decimal overs.
#[pyfunction]
fn py_overs_to_decimal(overs: &str) -> PyResult<f64> {
    overs_to_decimal(overs).map_err(to_py_err)
}

/// Convert decimal overs to cricket notation.
#[pyfunction]
fn py_decimal_to_overs(decimal: f64) -> String {
    decimal_to_overs(decimal)
}

#[pyfunction]
fn py_calculate_nrr(runs_for: f64, overs_for: f64, runs_against: f64, overs_against: f64) -> f64 {
    crate::nrr::calculate_nrr(runs_for, overs_for, runs_against, overs_against)
}

/// Structural reachability check, returned as JSON.
#[pyfunction]
#[pyo3(signature = (your_team, desired_position, standings_json = None))]
fn py_can_reach_position(
    your_team: &str,
    desired_position: u32,
    standings_json: Option<&str>,
) -> PyResult<String> {
    let table = load_table(standings_json)?;
    let check = can_reach_position(&table, your_team, desired_position).map_err(to_py_err)?;
    to_json(&check)
}

#[pyfunction]
#[pyo3(signature = (your_team, standings_json = None))]
fn py_reachable_positions(your_team: &str, standings_json: Option<&str>) -> PyResult<Vec<u32>> {
    let table = load_table(standings_json)?;
    reachable_positions(&table, your_team).map_err(to_py_err)
}

/// Solve a JSON scenario request, returning the JSON result.
#[pyfunction]
#[pyo3(signature = (request_json, standings_json = None))]
fn py_calculate_scenario(request_json: &str, standings_json: Option<&str>) -> PyResult<String> {
    let table = load_table(standings_json)?;
    let request = ScenarioRequest::from_json_str(request_json).map_err(to_py_err)?;
    request.validate().map_err(to_py_err)?;
    let result = calculate_scenario(&table, &request).map_err(to_py_err)?;
    to_json(&result)
}

/// Points table rows, as JSON.
#[pyfunction]
#[pyo3(signature = (standings_json = None))]
fn py_points_table(standings_json: Option<&str>) -> PyResult<String> {
    to_json(&load_table(standings_json)?.rows())
}

#[pymodule]
fn nrr_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_overs_to_decimal, m)?)?;
    m.add_function(wrap_pyfunction!(py_decimal_to_overs, m)?)?;
    m.add_function(wrap_pyfunction!(py_calculate_nrr, m)?)?;

    m.add_function(wrap_pyfunction!(py_can_reach_position, m)?)?;
    m.add_function(wrap_pyfunction!(py_reachable_positions, m)?)?;
    m.add_function(wrap_pyfunction!(py_calculate_scenario, m)?)?;
    m.add_function(wrap_pyfunction!(py_points_table, m)?)?;

    // Constants
    m.add("POINTS_PER_WIN", crate::constants::POINTS_PER_WIN)?;
    m.add("CHASE_OVERS_BUFFER", crate::constants::CHASE_OVERS_BUFFER)?;

    Ok(())
}
