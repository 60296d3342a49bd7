use wetterdienst_rdf::{
    render_values, weather_parameters, WetterdienstClient, WetterdienstRdfError,
};

#[tokio::main]
async fn main() -> Result<(), WetterdienstRdfError> {
    let client = WetterdienstClient::new()?;

    let values = client
        .values()
        .provider("dwd")
        .network("observation")
        .parameters(weather_parameters::SUNSHINE_DURATION_DAILY)
        .station(vec!["01048".to_string()])
        .date("2024-06-01")
        .call()
        .await?;

    // Content negotiation picks N-Triples here; pass None for JSON.
    let rendered = render_values(&values, Some("application/n-triples"))?;
    println!("{}", rendered.body);

    Ok(())
}
