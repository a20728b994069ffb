// The controller's resource surface as a capability trait.
//
// `ShcClient` is the production implementation; anything else that can
// answer these eight calls (an in-memory fixture, a recording proxy)
// can stand in for it at call sites that are generic over `SmartHome`.

use std::future::Future;

use crate::error::Error;
use crate::models::{Device, Message, Room, Scenario};

/// One method per (resource, action) pair exposed by the controller.
pub trait SmartHome: Send + Sync {
    /// `GET /smarthome/devices`
    fn list_devices(&self) -> impl Future<Output = Result<Vec<Device>, Error>> + Send;

    /// `GET /smarthome/devices/{id}`
    fn get_device(&self, id: &str) -> impl Future<Output = Result<Device, Error>> + Send;

    /// `GET /smarthome/rooms`
    fn list_rooms(&self) -> impl Future<Output = Result<Vec<Room>, Error>> + Send;

    /// `GET /smarthome/rooms/{id}`
    fn get_room(&self, id: &str) -> impl Future<Output = Result<Room, Error>> + Send;

    /// `GET /smarthome/scenarios`
    fn list_scenarios(&self) -> impl Future<Output = Result<Vec<Scenario>, Error>> + Send;

    /// `GET /smarthome/scenarios/{id}`
    fn get_scenario(&self, id: &str) -> impl Future<Output = Result<Scenario, Error>> + Send;

    /// `POST /smarthome/scenarios/{id}/triggers`, accepted with 202.
    fn trigger_scenario(&self, id: &str) -> impl Future<Output = Result<(), Error>> + Send;

    /// `GET /smarthome/messages`
    fn list_messages(&self) -> impl Future<Output = Result<Vec<Message>, Error>> + Send;
}
