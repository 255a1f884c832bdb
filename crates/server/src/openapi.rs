use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CarDoc {
    pub id: i32,
    pub marca: String,
    pub cor: String,
    #[schema(example = "ABC1D12")]
    pub placa: String,
}

#[derive(ToSchema)]
pub struct CreateCarBodyDoc {
    pub marca: String,
    pub cor: String,
    pub placa: String,
}

#[derive(ToSchema)]
pub struct FindCarsBodyDoc {
    pub cor: Option<String>,
    pub marca: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::cars::create,
        crate::routes::cars::find,
        crate::routes::cars::find_one,
    ),
    components(
        schemas(
            HealthResponse,
            CarDoc,
            CreateCarBodyDoc,
            FindCarsBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "cars")
    )
)]
pub struct ApiDoc;
