use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

#[napi]
pub fn mortgage_to_rent(input_json: String) -> NapiResult<String> {
    let input: realty_finance_core::conversion::MortgageToRentInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = realty_finance_core::conversion::calculate_mortgage_to_rent(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn rent_to_mortgage(input_json: String) -> NapiResult<String> {
    let input: realty_finance_core::conversion::RentToMortgageInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = realty_finance_core::conversion::calculate_rent_to_mortgage(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    let input: realty_finance_core::amortization::AmortizationInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = realty_finance_core::amortization::generate_amortization_schedule(
        input.loan_amount,
        input.interest_rate,
        input.term_months,
        input.additional_payment,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn amortize(input_json: String) -> NapiResult<String> {
    let input: realty_finance_core::amortization::AmortizationInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = realty_finance_core::amortization::amortize(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Comparison & affordability
// ---------------------------------------------------------------------------

#[napi]
pub fn compare_mortgage_options(input_json: String) -> NapiResult<String> {
    let input: realty_finance_core::comparison::ComparisonInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = realty_finance_core::comparison::compare_mortgage_options(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn affordability(input_json: String) -> NapiResult<String> {
    let input: realty_finance_core::affordability::AffordabilityInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = realty_finance_core::affordability::calculate_affordability(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Market rates
// ---------------------------------------------------------------------------

#[napi]
pub fn market_rates() -> NapiResult<String> {
    serde_json::to_string(&realty_finance_core::market::market_rates()).map_err(to_napi_error)
}

#[napi]
pub fn market_rate(city: String) -> NapiResult<String> {
    let rates = realty_finance_core::market::market_rate(&city).map_err(to_napi_error)?;
    serde_json::to_string(&rates).map_err(to_napi_error)
}
