//! Record operations

use reqwest::Method;

use crate::client::{Client, NO_PARAMS};
use crate::codec::{decode, expect_empty_object};
use crate::error::Result;
use crate::types::{CreateRecordParams, Record, UpdateRecordParams};

use super::{record_path, records_path};

impl Client {
    /// 获取 zone 下的全部记录
    pub async fn records(&self, zone_id: &str) -> Result<Vec<Record>> {
        let raw = self
            .request(Method::GET, &records_path(zone_id), NO_PARAMS)
            .await?;
        decode(&raw)
    }

    /// 获取记录详情
    pub async fn record(&self, zone_id: &str, record_id: &str) -> Result<Record> {
        let raw = self
            .request(Method::GET, &record_path(zone_id, record_id), NO_PARAMS)
            .await?;
        decode(&raw)
    }

    /// 创建记录
    ///
    /// Without an explicit TTL the owning zone is fetched first and its
    /// `default_ttl` is sent. If that lookup fails, its error is returned and
    /// nothing is created.
    pub async fn create_record(&self, params: &CreateRecordParams) -> Result<Record> {
        let zone_id = params.zone_id();
        let body = match params.ttl_value() {
            Some(_) => params.clone(),
            None => {
                let zone = self.zone(zone_id).await?;
                log::debug!(
                    "Using default TTL {} of zone {zone_id}",
                    zone.default_ttl
                );
                params.clone().ttl(zone.default_ttl)
            }
        };

        let raw = self
            .request(Method::POST, &records_path(zone_id), Some(&body))
            .await?;
        decode(&raw)
    }

    /// 更新记录（zone_id / record_id 只出现在路径中）
    pub async fn update_record(&self, params: &UpdateRecordParams) -> Result<Record> {
        let path = record_path(params.zone_id(), params.record_id());
        let raw = self.request(Method::PUT, &path, Some(params)).await?;
        decode(&raw)
    }

    /// 删除记录，成功时响应体为 `{}`
    pub async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<()> {
        let raw = self
            .request(Method::DELETE, &record_path(zone_id, record_id), NO_PARAMS)
            .await?;
        expect_empty_object(&raw)
    }
}
