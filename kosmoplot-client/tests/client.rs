use std::net::SocketAddr;

use kosmoplot_client::{
    ApiClient,
    Error,
};
use kosmoplot_protocol::{
    filter::StarFilter,
    model::star::{
        NewStar,
        StarId,
    },
};
use kosmoplot_server::Builder;
use tokio::net::TcpListener;

async fn serve() -> ApiClient {
    let router = Builder::default().with_in_memory().build().unwrap();
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await });

    ApiClient::new(format!("http://{address}/").parse().unwrap()).unwrap()
}

fn star(name: &str, constellation: &str, distance_light_year: i64) -> NewStar {
    NewStar {
        name: name.to_owned(),
        constellation: constellation.to_owned(),
        right_ascension: "18h 36m 56.3s".to_owned(),
        declination: "+38° 47′ 01″".to_owned(),
        apparent_magnitude: 0.03,
        absolute_magnitude: 0.58,
        distance_light_year,
        spectral_class: Some("A0V".to_owned()),
    }
}

#[tokio::test]
async fn client_drives_the_whole_lifecycle() {
    let api = serve().await;

    let status = api.status().await.unwrap();
    assert_eq!(
        status.server_version.to_string(),
        kosmoplot_server::VERSION
    );

    let vega = api.create_star(&star("Vega", "Lyra", 25)).await.unwrap();
    let deneb = api.create_star(&star("Deneb", "Cygnus", 2615)).await.unwrap();
    assert_eq!(vega.data, star("Vega", "Lyra", 25));

    let all = api.list_stars(&StarFilter::default()).await.unwrap();
    assert_eq!(all, vec![vega.clone(), deneb.clone()]);

    let lyra = api
        .list_stars(&StarFilter::default().with_name("Deneb").with_constellation("Lyra"))
        .await
        .unwrap();
    assert_eq!(lyra, vec![vega.clone()]);

    assert_eq!(api.get_star(deneb.id).await.unwrap(), Some(deneb.clone()));
    assert_eq!(api.delete_star(deneb.id).await.unwrap(), Some(deneb.clone()));
    assert_eq!(api.get_star(deneb.id).await.unwrap(), None);
    assert_eq!(api.delete_star(deneb.id).await.unwrap(), None);

    let unknown: StarId = "00000000-0000-4000-8000-000000000000".parse().unwrap();
    assert_eq!(api.get_star(unknown).await.unwrap(), None);
}

#[tokio::test]
async fn rejected_stars_surface_field_errors() {
    let api = serve().await;

    let mut bad = star("Vega", "Lyra", 25);
    bad.apparent_magnitude = f64::NAN;

    match api.create_star(&bad).await {
        Err(Error::Rejected(errors)) => {
            assert_eq!(
                errors.fields().collect::<Vec<_>>(),
                vec!["apparent_magnitude"]
            );
        }
        other => panic!("expected a rejection, got {other:?}"),
    }
}
