//! Zone operations

use reqwest::Method;

use crate::client::{Client, NO_PARAMS};
use crate::codec::{decode, expect_empty_object};
use crate::error::Result;
use crate::types::{CreateZoneParams, UpdateZoneParams, Zone};

use super::{ZONES_PATH, verify_path, zone_path};

impl Client {
    /// 获取全部 zone
    pub async fn zones(&self) -> Result<Vec<Zone>> {
        let raw = self.request(Method::GET, ZONES_PATH, NO_PARAMS).await?;
        decode(&raw)
    }

    /// 获取 zone 详情
    pub async fn zone(&self, zone_id: &str) -> Result<Zone> {
        let raw = self.request(Method::GET, &zone_path(zone_id), NO_PARAMS).await?;
        decode(&raw)
    }

    /// 创建 zone
    pub async fn create_zone(&self, params: &CreateZoneParams) -> Result<Zone> {
        let raw = self.request(Method::POST, ZONES_PATH, Some(params)).await?;
        decode(&raw)
    }

    /// 更新 zone（zone_id 只出现在路径中）
    pub async fn update_zone(&self, params: &UpdateZoneParams) -> Result<Zone> {
        let raw = self
            .request(Method::PUT, &zone_path(params.zone_id()), Some(params))
            .await?;
        decode(&raw)
    }

    /// 删除 zone，成功时响应体为 `{}`
    pub async fn delete_zone(&self, zone_id: &str) -> Result<()> {
        let raw = self
            .request(Method::DELETE, &zone_path(zone_id), NO_PARAMS)
            .await?;
        expect_empty_object(&raw)
    }

    /// 请求验证域名所有权，成功时响应体为 `{}`
    pub async fn verify_zone(&self, zone_id: &str) -> Result<()> {
        let raw = self
            .request(Method::POST, &verify_path(zone_id), NO_PARAMS)
            .await?;
        expect_empty_object(&raw)
    }
}
