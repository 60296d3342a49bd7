use wetterdienst_rdf::{render_stations, LatLon, WetterdienstClient, WetterdienstRdfError};

#[tokio::main]
async fn main() -> Result<(), WetterdienstRdfError> {
    let client = WetterdienstClient::new()?;

    let stations = client
        .stations()
        .provider("dwd")
        .network("observation")
        .parameters("daily/climate_summary")
        .periods("recent")
        .coordinates(LatLon(52.52, 13.40))
        .rank(5)
        .call()
        .await?;

    let rendered = render_stations(&stations, Some("text/turtle"))?;
    println!("# {}", rendered.content_type);
    println!("{}", rendered.body);

    Ok(())
}
