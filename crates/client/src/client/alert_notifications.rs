use grafana_core::types::{
    AlertNotification, CreateAlertNotification, TestAlertNotification, UpdateAlertNotification,
};

use crate::error::Result;
use crate::http::RestClient;

const ALERT_NOTIFICATION_API: &str = "/api/alert-notifications";

/// Notification channels under `/api/alert-notifications`.
#[derive(Debug, Clone, Copy)]
pub struct AlertNotifications<'a> {
    rest: &'a RestClient,
}

impl<'a> AlertNotifications<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    pub async fn list(&self) -> Result<Vec<AlertNotification>> {
        self.rest.get(ALERT_NOTIFICATION_API).fetch().await
    }

    pub async fn get_by_id(&self, notification_id: i64) -> Result<AlertNotification> {
        self.rest
            .get(ALERT_NOTIFICATION_API)
            .sub_path("/:notificationId")
            .path_param("notificationId", notification_id)
            .fetch()
            .await
    }

    pub async fn create(&self, notification: &CreateAlertNotification) -> Result<AlertNotification> {
        self.rest
            .post(ALERT_NOTIFICATION_API)
            .json(notification)
            .fetch()
            .await
    }

    /// Send a test notification through an unsaved channel.
    pub async fn test(&self, notification: &TestAlertNotification) -> Result<()> {
        self.rest
            .post(ALERT_NOTIFICATION_API)
            .sub_path("/test")
            .json(notification)
            .execute()
            .await
    }

    pub async fn update(
        &self,
        notification_id: i64,
        notification: &UpdateAlertNotification,
    ) -> Result<AlertNotification> {
        self.rest
            .put(ALERT_NOTIFICATION_API)
            .sub_path("/:notificationId")
            .path_param("notificationId", notification_id)
            .json(notification)
            .fetch()
            .await
    }

    pub async fn delete(&self, notification_id: i64) -> Result<()> {
        self.rest
            .delete(ALERT_NOTIFICATION_API)
            .sub_path("/:notificationId")
            .path_param("notificationId", notification_id)
            .execute()
            .await
    }
}
