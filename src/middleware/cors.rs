use actix_cors::Cors;

/// Cross-origin policy: any origin, any method, any header
pub fn cors_policy() -> Cors {
    Cors::permissive()
}
