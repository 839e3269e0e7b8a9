// ── Network registry ──
//
// Sole owner of every device and link. All mutation goes through the
// methods below so the invariants hold at every return point:
//   * device identifiers are unique
//   * every link's endpoints exist, and at most one link joins any pair
//   * the IP counter never decreases

use indexmap::IndexMap;

use crate::command::requests::{AddDeviceRequest, AddLinkRequest};
use crate::error::CoreError;
use crate::model::{Device, Link, Position};

/// Prefix for addresses handed out by the registry's IP pool.
pub const IP_POOL_PREFIX: &str = "192.168.1.";

/// In-memory registry of simulated devices and links.
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) devices: IndexMap<String, Device>,
    pub(crate) links: Vec<Link>,
    pub(crate) ip_counter: u32,
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

impl Network {
    pub fn new() -> Self {
        Self {
            devices: IndexMap::new(),
            links: Vec::new(),
            ip_counter: 1,
        }
    }

    // ── Devices ──────────────────────────────────────────────────────

    /// Create a device, generating its id and IP when the request omits them.
    ///
    /// An explicitly requested id that is already taken is rejected and the
    /// existing device stays as it is.
    pub fn add_device(&mut self, request: AddDeviceRequest) -> Result<&Device, CoreError> {
        let AddDeviceRequest {
            device_type,
            id,
            ip,
            position,
        } = request;

        let id = match id {
            Some(id) if self.devices.contains_key(&id) => {
                return Err(CoreError::DeviceExists { id });
            }
            Some(id) => id,
            None => self.next_device_id(&device_type),
        };
        check_coordinates(position)?;
        let ip = match ip {
            Some(ip) => ip,
            None => self.allocate_ip()?,
        };

        tracing::debug!(%id, %device_type, %ip, "adding device");
        let device = Device::new(id.clone(), device_type, ip, position);
        let (index, _) = self.devices.insert_full(id, device);
        Ok(&self.devices[index])
    }

    pub fn get_device(&self, id: &str) -> Option<&Device> {
        self.devices.get(id)
    }

    pub fn contains_device(&self, id: &str) -> bool {
        self.devices.contains_key(id)
    }

    /// Devices in the order they were added.
    pub fn list_devices(&self) -> Vec<&Device> {
        self.devices.values().collect()
    }

    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Delete a device together with every link touching it.
    pub fn remove_device(&mut self, id: &str) -> Result<Device, CoreError> {
        let device = self
            .devices
            .shift_remove(id)
            .ok_or_else(|| CoreError::DeviceNotFound { id: id.into() })?;

        let before = self.links.len();
        self.links.retain(|link| !link.touches(id));
        tracing::debug!(
            %id,
            dropped_links = before - self.links.len(),
            "removed device"
        );
        Ok(device)
    }

    pub fn enable_device(&mut self, id: &str) -> Result<&Device, CoreError> {
        let device = self.device_mut(id)?;
        device.enable();
        tracing::debug!(%id, "device enabled");
        Ok(&*device)
    }

    pub fn disable_device(&mut self, id: &str) -> Result<&Device, CoreError> {
        let device = self.device_mut(id)?;
        device.disable();
        tracing::debug!(%id, "device disabled");
        Ok(&*device)
    }

    /// Move a device on the display canvas. Has no effect on behavior.
    pub fn set_position(&mut self, id: &str, x: f64, y: f64) -> Result<(), CoreError> {
        let position = Position::new(x, y);
        check_coordinates(position)?;
        self.device_mut(id)?.position = position;
        Ok(())
    }

    // ── Links ────────────────────────────────────────────────────────

    /// Connect two existing, distinct, not-yet-linked devices.
    pub fn add_link(&mut self, request: AddLinkRequest) -> Result<&Link, CoreError> {
        let AddLinkRequest {
            src,
            dst,
            bandwidth_kbps,
            delay_ms,
        } = request;

        for endpoint in [&src, &dst] {
            if !self.devices.contains_key(endpoint.as_str()) {
                return Err(CoreError::EndpointMissing {
                    id: endpoint.clone(),
                });
            }
        }
        if src == dst {
            return Err(CoreError::SelfLink { id: src });
        }
        if bandwidth_kbps == 0 {
            return Err(CoreError::InvalidParameter {
                field: "bandwidth",
                reason: "must be a positive number of Kbps".into(),
            });
        }
        if delay_ms == 0 {
            return Err(CoreError::InvalidParameter {
                field: "delay",
                reason: "must be a positive number of milliseconds".into(),
            });
        }
        if self.are_linked(&src, &dst) {
            return Err(CoreError::DuplicateLink { src, dst });
        }

        tracing::debug!(%src, %dst, bandwidth_kbps, delay_ms, "adding link");
        self.links.push(Link {
            src,
            dst,
            bandwidth_kbps,
            delay_ms,
        });
        Ok(&self.links[self.links.len() - 1])
    }

    /// Links in the order they were created.
    pub fn list_links(&self) -> &[Link] {
        &self.links
    }

    /// Whether any link joins `a` and `b`, in either direction.
    pub fn are_linked(&self, a: &str, b: &str) -> bool {
        self.links.iter().any(|link| link.connects(a, b))
    }

    /// Links with `id` as one of their endpoints.
    pub fn links_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Link> + 'a {
        self.links.iter().filter(move |link| link.touches(id))
    }

    // ── IP pool ──────────────────────────────────────────────────────

    /// The host number the next auto-assigned address will use.
    pub fn ip_counter(&self) -> u32 {
        self.ip_counter
    }

    fn allocate_ip(&mut self) -> Result<String, CoreError> {
        let next = self
            .ip_counter
            .checked_add(1)
            .ok_or_else(|| CoreError::InvalidParameter {
                field: "ip_counter",
                reason: "address pool exhausted".into(),
            })?;
        let ip = format!("{IP_POOL_PREFIX}{}", self.ip_counter);
        self.ip_counter = next;
        Ok(ip)
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn device_mut(&mut self, id: &str) -> Result<&mut Device, CoreError> {
        self.devices
            .get_mut(id)
            .ok_or_else(|| CoreError::DeviceNotFound { id: id.into() })
    }

    /// `{type}_{n}` with `n` counted per type, skipping identifiers in use.
    fn next_device_id(&self, device_type: &str) -> String {
        let same_type = self
            .devices
            .values()
            .filter(|d| d.device_type == device_type)
            .count();

        (same_type + 1..)
            .map(|n| format!("{device_type}_{n}"))
            .find(|candidate| !self.devices.contains_key(candidate))
            .unwrap_or_else(|| unreachable!("device id space exhausted"))
    }
}

/// JSON has no encoding for NaN or infinity, so such positions could not
/// be loaded back after a save.
fn check_coordinates(position: Position) -> Result<(), CoreError> {
    if position.x.is_finite() && position.y.is_finite() {
        Ok(())
    } else {
        Err(CoreError::InvalidParameter {
            field: "position",
            reason: "coordinates must be finite numbers".into(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::DeviceStatus;

    fn add(net: &mut Network, device_type: &str) -> (String, String) {
        let d = net.add_device(AddDeviceRequest::new(device_type)).unwrap();
        (d.id.clone(), d.ip.clone())
    }

    #[test]
    fn generated_ids_count_per_type() {
        let mut net = Network::new();
        let expected = [
            ("sensor", "sensor_1", "192.168.1.1"),
            ("lamp", "lamp_1", "192.168.1.2"),
            ("sensor", "sensor_2", "192.168.1.3"),
        ];
        for (device_type, id, ip) in expected {
            let (got_id, got_ip) = add(&mut net, device_type);
            assert_eq!(got_id, id);
            assert_eq!(got_ip, ip);
        }
        assert_eq!(net.ip_counter(), 4);
    }

    #[test]
    fn generated_ids_skip_taken_identifiers() {
        let mut net = Network::new();
        net.add_device(AddDeviceRequest::new("sensor").with_id("sensor_1"))
            .unwrap();
        let (id, _) = add(&mut net, "sensor");
        assert_eq!(id, "sensor_2");

        // Removing the first leaves one sensor; the next candidate is taken.
        net.remove_device("sensor_1").unwrap();
        let (id, _) = add(&mut net, "sensor");
        assert_eq!(id, "sensor_3");
    }

    #[test]
    fn generated_ids_never_collide_with_live_devices() {
        let mut net = Network::new();
        net.add_device(AddDeviceRequest::new("cam").with_id("cam_2"))
            .unwrap();
        for round in 0..20 {
            let before: Vec<String> = net.list_devices().iter().map(|d| d.id.clone()).collect();
            let (id, _) = add(&mut net, "cam");
            assert!(!before.contains(&id), "id {id} was already in use");
            if round % 3 == 0 {
                net.remove_device(&id).unwrap();
            }
        }
    }

    #[test]
    fn explicit_ip_does_not_consume_pool() {
        let mut net = Network::new();
        let d = net
            .add_device(AddDeviceRequest::new("gw").with_ip("10.0.0.1").at(3.0, 4.0))
            .unwrap();
        assert_eq!(d.ip, "10.0.0.1");
        assert_eq!(d.position, Position::new(3.0, 4.0));
        assert_eq!(net.ip_counter(), 1);
    }

    #[test]
    fn duplicate_explicit_id_is_rejected() {
        let mut net = Network::new();
        net.add_device(AddDeviceRequest::new("sensor").with_id("hub"))
            .unwrap();
        let err = net
            .add_device(AddDeviceRequest::new("lamp").with_id("hub"))
            .unwrap_err();
        assert!(matches!(err, CoreError::DeviceExists { ref id } if id == "hub"));
        assert_eq!(err.kind(), ErrorKind::Conflict);

        // Original device untouched, pool untouched by the failed call.
        assert_eq!(net.get_device("hub").unwrap().device_type, "sensor");
        assert_eq!(net.device_count(), 1);
        assert_eq!(net.ip_counter(), 2);
    }

    #[test]
    fn reverse_link_is_a_duplicate() {
        let mut net = Network::new();
        add(&mut net, "a");
        add(&mut net, "b");
        net.add_link(AddLinkRequest::new("a_1", "b_1")).unwrap();
        let err = net.add_link(AddLinkRequest::new("b_1", "a_1")).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateLink { .. }));
        assert_eq!(net.list_links().len(), 1);
    }

    #[test]
    fn link_defaults_apply() {
        let mut net = Network::new();
        add(&mut net, "a");
        add(&mut net, "b");
        let link = net.add_link(AddLinkRequest::new("a_1", "b_1")).unwrap();
        assert_eq!(link.bandwidth_kbps, 1000);
        assert_eq!(link.delay_ms, 10);
    }

    #[test]
    fn link_requires_existing_distinct_endpoints() {
        let mut net = Network::new();
        add(&mut net, "a");

        let err = net.add_link(AddLinkRequest::new("a_1", "ghost")).unwrap_err();
        assert!(matches!(err, CoreError::EndpointMissing { ref id } if id == "ghost"));

        let err = net.add_link(AddLinkRequest::new("a_1", "a_1")).unwrap_err();
        assert!(matches!(err, CoreError::SelfLink { .. }));
        assert!(net.list_links().is_empty());
    }

    #[test]
    fn zero_link_attributes_are_rejected() {
        let mut net = Network::new();
        add(&mut net, "a");
        add(&mut net, "b");
        let err = net
            .add_link(AddLinkRequest::new("a_1", "b_1").bandwidth(0))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = net
            .add_link(AddLinkRequest::new("a_1", "b_1").delay(0))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(net.list_links().is_empty());
    }

    #[test]
    fn remove_device_drops_incident_links_only() {
        let mut net = Network::new();
        for t in ["a", "b", "c"] {
            add(&mut net, t);
        }
        net.add_link(AddLinkRequest::new("a_1", "b_1")).unwrap();
        net.add_link(AddLinkRequest::new("c_1", "a_1")).unwrap();
        net.add_link(AddLinkRequest::new("b_1", "c_1")).unwrap();

        let removed = net.remove_device("a_1").unwrap();
        assert_eq!(removed.id, "a_1");
        assert!(net.list_links().iter().all(|l| !l.touches("a_1")));
        assert_eq!(net.list_links().len(), 1);
        assert!(net.are_linked("c_1", "b_1"));

        let ids: Vec<_> = net.list_devices().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["b_1", "c_1"]);
    }

    #[test]
    fn remove_unknown_device_fails() {
        let mut net = Network::new();
        let err = net.remove_device("ghost").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn status_transitions_log_once_each() {
        let mut net = Network::new();
        add(&mut net, "lamp");
        let d = net.disable_device("lamp_1").unwrap();
        assert_eq!(d.status, DeviceStatus::Disabled);
        assert_eq!(d.log().len(), 1);
        let d = net.enable_device("lamp_1").unwrap();
        assert_eq!(d.status, DeviceStatus::Enabled);
        assert_eq!(d.log().len(), 2);

        assert!(net.disable_device("ghost").is_err());
    }

    #[test]
    fn set_position_moves_device() {
        let mut net = Network::new();
        add(&mut net, "lamp");
        net.set_position("lamp_1", -20.5, 13.0).unwrap();
        assert_eq!(
            net.get_device("lamp_1").unwrap().position,
            Position::new(-20.5, 13.0)
        );
        assert!(net.set_position("ghost", 0.0, 0.0).is_err());
    }

    #[test]
    fn links_of_filters_by_endpoint() {
        let mut net = Network::new();
        for t in ["a", "b", "c"] {
            add(&mut net, t);
        }
        net.add_link(AddLinkRequest::new("a_1", "b_1")).unwrap();
        net.add_link(AddLinkRequest::new("b_1", "c_1")).unwrap();
        assert_eq!(net.links_of("b_1").count(), 2);
        assert_eq!(net.links_of("a_1").count(), 1);
        assert_eq!(net.links_of("zzz").count(), 0);
    }

    #[test]
    fn exhausted_ip_pool_rejects_add() {
        let mut net = Network::new();
        net.ip_counter = u32::MAX;
        let err = net.add_device(AddDeviceRequest::new("sensor")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidParameter { field: "ip_counter", .. }));
        assert_eq!(net.device_count(), 0);
        assert_eq!(net.ip_counter(), u32::MAX);

        // An explicit address does not need the pool.
        net.add_device(AddDeviceRequest::new("gw").with_ip("10.0.0.1"))
            .unwrap();
        assert_eq!(net.device_count(), 1);
    }

    #[test]
    fn non_finite_positions_are_rejected() {
        let mut net = Network::new();
        add(&mut net, "lamp");
        for (x, y) in [(f64::NAN, 1.0), (0.0, f64::INFINITY), (f64::NEG_INFINITY, 0.0)] {
            let err = net.set_position("lamp_1", x, y).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
        assert_eq!(net.get_device("lamp_1").unwrap().position, Position::default());

        let err = net
            .add_device(AddDeviceRequest::new("cam").at(f64::NAN, 0.0))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidParameter { field: "position", .. }));
        assert_eq!(net.device_count(), 1);
        assert_eq!(net.ip_counter(), 2);
    }
}
