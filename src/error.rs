use thiserror::Error;

/// Errors surfaced by the component machinery.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcsError {
	/// Every distinct component type occupies one of a fixed number of id
	/// slots, sized at build time. Hitting the ceiling is a configuration
	/// error, reported at registration time rather than deferred.
	#[error("component type limit reached: all {limit} type ids are in use")]
	TypeCapacityExhausted {
		/// The build-time id ceiling.
		limit: usize,
	},
}
