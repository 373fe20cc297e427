// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! Users, roles and alternate titles.

use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::Status;

use super::api::{CoreUserApi, RpcStream};
use super::envelope::CallEnvelope;
use super::proto::core_user_service_client::CoreUserServiceClient;
use super::proto::{
    Ack, GetManagedUsersRequest, GetUserAltTitleRequest, GetUserByEdipinRequest,
    GetUserByIdRequest, GetUserRolesRequest, ManagedUser, SearchUsersRequest,
    UpdateUserAltTitleRequest, UpdateUserLoginRequest, User, UserAltTitle, UserRoleList,
};

#[derive(Clone)]
pub struct CoreUserClient {
    client: CoreUserServiceClient<Channel>,
    envelope: CallEnvelope,
}

impl CoreUserClient {
    pub fn new(channel: Channel, envelope: CallEnvelope) -> Self {
        Self {
            client: CoreUserServiceClient::new(channel),
            envelope,
        }
    }
}

#[async_trait]
impl CoreUserApi for CoreUserClient {
    async fn get_user_by_id(&self, request: GetUserByIdRequest) -> Result<User, Status> {
        self.envelope
            .unary("CoreUserService/GetUserById", request, |request| {
                let mut client = self.client.clone();
                async move { client.get_user_by_id(request).await }
            })
            .await
    }

    async fn get_user_by_edipin(&self, request: GetUserByEdipinRequest) -> Result<User, Status> {
        self.envelope
            .unary("CoreUserService/GetUserByEdipin", request, |request| {
                let mut client = self.client.clone();
                async move { client.get_user_by_edipin(request).await }
            })
            .await
    }

    async fn get_user_roles(&self, request: GetUserRolesRequest) -> Result<UserRoleList, Status> {
        self.envelope
            .unary("CoreUserService/GetUserRoles", request, |request| {
                let mut client = self.client.clone();
                async move { client.get_user_roles(request).await }
            })
            .await
    }

    async fn update_user_login(&self, request: UpdateUserLoginRequest) -> Result<Ack, Status> {
        self.envelope
            .unary("CoreUserService/UpdateUserLogin", request, |request| {
                let mut client = self.client.clone();
                async move { client.update_user_login(request).await }
            })
            .await
    }

    async fn get_user_alt_title(
        &self,
        request: GetUserAltTitleRequest,
    ) -> Result<UserAltTitle, Status> {
        self.envelope
            .unary("CoreUserService/GetUserAltTitle", request, |request| {
                let mut client = self.client.clone();
                async move { client.get_user_alt_title(request).await }
            })
            .await
    }

    async fn update_user_alt_title(
        &self,
        request: UpdateUserAltTitleRequest,
    ) -> Result<Ack, Status> {
        self.envelope
            .unary("CoreUserService/UpdateUserAltTitle", request, |request| {
                let mut client = self.client.clone();
                async move { client.update_user_alt_title(request).await }
            })
            .await
    }

    fn search_users(&self, request: SearchUsersRequest) -> RpcStream<User> {
        let mut client = self.client.clone();
        self.envelope.server_streaming(
            "CoreUserService/SearchUsers",
            request,
            move |request| async move { client.search_users(request).await },
        )
    }

    fn get_managed_users(&self, request: GetManagedUsersRequest) -> RpcStream<ManagedUser> {
        let mut client = self.client.clone();
        self.envelope.server_streaming(
            "CoreUserService/GetManagedUsers",
            request,
            move |request| async move { client.get_managed_users(request).await },
        )
    }
}
